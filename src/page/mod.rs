pub mod binder;

use crate::core::ElementId;
use crate::core::form::Form;
use indexmap::IndexMap;

/// A standalone button outside any form (the watchlist toggle). Carries the
/// class list and data attributes its markup would, so delegated matchers
/// and handlers can read them.
pub struct PageButton {
    id: ElementId,
    label: String,
    idle_label: String,
    classes: Vec<String>,
    data: IndexMap<String, String>,
    disabled: bool,
}

impl PageButton {
    pub fn new(id: impl Into<ElementId>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: id.into(),
            idle_label: label.clone(),
            label,
            classes: Vec::new(),
            data: IndexMap::new(),
            disabled: false,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn data(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Restore the label the button was created with.
    pub fn restore_label(&mut self) {
        self.label = self.idle_label.clone();
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

/// A user action on a page element, as delivered to the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Submit { form: ElementId },
    Click { target: ElementId },
}

/// A focusable position on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusRef {
    Field { form: ElementId, name: String },
    Control { form: ElementId },
    Button { id: ElementId },
}

/// The page model: every element the handlers read or mutate. Each handler
/// is constructed with the ids of its own elements and touches nothing
/// else.
#[derive(Default)]
pub struct Page {
    forms: IndexMap<ElementId, Form>,
    buttons: IndexMap<ElementId, PageButton>,
    status: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_form(&mut self, form: Form) {
        self.forms.insert(form.id().clone(), form);
    }

    pub fn add_button(&mut self, button: PageButton) {
        self.buttons.insert(button.id().clone(), button);
    }

    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.get(id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut Form> {
        self.forms.get_mut(id)
    }

    pub fn button(&self, id: &str) -> Option<&PageButton> {
        self.buttons.get(id)
    }

    pub fn button_mut(&mut self, id: &str) -> Option<&mut PageButton> {
        self.buttons.get_mut(id)
    }

    pub fn forms(&self) -> impl Iterator<Item = &Form> {
        self.forms.values()
    }

    pub fn buttons(&self) -> impl Iterator<Item = &PageButton> {
        self.buttons.values()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, line: impl Into<String>) {
        self.status = Some(line.into());
    }
}

#[cfg(test)]
mod tests {
    use super::PageButton;

    #[test]
    fn restore_label_returns_to_the_initial_text() {
        let mut button = PageButton::new("watchlist-3", "Add to watchlist");
        button.set_label("✓ Added");
        button.restore_label();
        assert_eq!(button.label(), "Add to watchlist");
    }

    #[test]
    fn class_list_adds_once_and_removes() {
        let mut button = PageButton::new("watchlist-3", "Add to watchlist");
        button.add_class("active");
        button.add_class("active");
        assert!(button.has_class("active"));
        button.remove_class("active");
        assert!(!button.has_class("active"));
    }
}
