use crate::core::ElementId;
use crate::page::{Page, PageButton, PageEvent};

/// Predicate a delegated binding applies to the actual event target.
pub type TargetMatcher = Box<dyn Fn(&PageButton) -> bool + Send>;

/// Matches buttons carrying the given class.
pub fn class_matcher(class: impl Into<String>) -> TargetMatcher {
    let class = class.into();
    Box::new(move |button: &PageButton| button.has_class(&class))
}

enum Binding {
    /// One listener attached directly to one element.
    Element { id: ElementId, handler: usize },
    /// One listener on the page root, filtered by a target matcher, so
    /// elements added after binding are still covered.
    Delegated { matcher: TargetMatcher, handler: usize },
}

/// Routes page events to handler indices. Built once at page readiness.
#[derive(Default)]
pub struct Binder {
    bindings: Vec<Binding>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a handler to one element; rebinding the same element replaces
    /// the previous listener so each element keeps exactly one.
    pub fn bind_element(&mut self, id: impl Into<ElementId>, handler: usize) {
        let id = id.into();
        self.bindings.retain(|binding| match binding {
            Binding::Element { id: bound, .. } => bound != &id,
            Binding::Delegated { .. } => true,
        });
        self.bindings.push(Binding::Element { id, handler });
    }

    pub fn bind_delegated(&mut self, matcher: TargetMatcher, handler: usize) {
        self.bindings.push(Binding::Delegated { matcher, handler });
    }

    /// Resolve an event to the handler it belongs to, if any. Delegated
    /// matchers are evaluated against the live page at event time.
    pub fn resolve(&self, page: &Page, event: &PageEvent) -> Option<usize> {
        let target = match event {
            PageEvent::Submit { form } => form,
            PageEvent::Click { target } => target,
        };

        for binding in &self.bindings {
            match binding {
                Binding::Element { id, handler } if id == target => return Some(*handler),
                Binding::Delegated { matcher, handler } => {
                    if matches!(event, PageEvent::Click { .. })
                        && page.button(target.as_str()).is_some_and(|b| matcher(b))
                    {
                        return Some(*handler);
                    }
                }
                Binding::Element { .. } => {}
            }
        }
        None
    }
}
