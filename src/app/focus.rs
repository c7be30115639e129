use crate::core::field::FieldKind;
use crate::page::{FocusRef, Page};

/// Cycles focus over the page's interactive positions, skipping whatever is
/// currently disabled (a retired rating selector, a pending control).
pub struct FocusRing {
    order: Vec<FocusRef>,
    index: Option<usize>,
}

impl FocusRing {
    pub fn from_page(page: &Page) -> Self {
        let mut order = Vec::new();

        for form in page.forms() {
            for field in form.fields() {
                if field.kind() != &FieldKind::Hidden {
                    order.push(FocusRef::Field {
                        form: form.id().clone(),
                        name: field.name().to_string(),
                    });
                }
            }
            order.push(FocusRef::Control {
                form: form.id().clone(),
            });
        }
        for button in page.buttons() {
            order.push(FocusRef::Button {
                id: button.id().clone(),
            });
        }

        let mut ring = Self { order, index: None };
        ring.advance(page, 1);
        ring
    }

    pub fn current(&self) -> Option<&FocusRef> {
        self.index.and_then(|index| self.order.get(index))
    }

    pub fn next(&mut self, page: &Page) {
        self.advance(page, 1);
    }

    pub fn prev(&mut self, page: &Page) {
        self.advance(page, -1);
    }

    fn advance(&mut self, page: &Page, direction: isize) {
        if self.order.is_empty() {
            return;
        }

        let len = self.order.len() as isize;
        let start = self.index.map(|index| index as isize).unwrap_or(-direction);
        for step in 1..=len {
            let candidate = (((start + direction * step) % len) + len) % len;
            if focusable(page, &self.order[candidate as usize]) {
                self.index = Some(candidate as usize);
                return;
            }
        }
    }
}

fn focusable(page: &Page, target: &FocusRef) -> bool {
    match target {
        FocusRef::Field { form, name } => page
            .form(form.as_str())
            .and_then(|form| form.field(name))
            .is_some_and(|field| field.is_editable()),
        FocusRef::Control { form } => page
            .form(form.as_str())
            .is_some_and(|form| form.control().can_trigger()),
        FocusRef::Button { id } => page
            .button(id.as_str())
            .is_some_and(|button| !button.is_disabled()),
    }
}

#[cfg(test)]
mod tests {
    use super::FocusRing;
    use crate::core::field::Field;
    use crate::core::form::Form;
    use crate::page::{FocusRef, Page};

    fn demo_page() -> Page {
        let mut page = Page::new();
        page.add_form(
            Form::new("login-form", "/login")
                .with_field(Field::text("email", "Email"))
                .with_field(Field::password("password", "Password")),
        );
        page
    }

    #[test]
    fn starts_on_the_first_field() {
        let page = demo_page();
        let ring = FocusRing::from_page(&page);
        assert!(matches!(
            ring.current(),
            Some(FocusRef::Field { name, .. }) if name == "email"
        ));
    }

    #[test]
    fn wraps_around_in_both_directions() {
        let page = demo_page();
        let mut ring = FocusRing::from_page(&page);

        ring.next(&page);
        ring.next(&page);
        assert!(matches!(ring.current(), Some(FocusRef::Control { .. })));
        ring.next(&page);
        assert!(matches!(
            ring.current(),
            Some(FocusRef::Field { name, .. }) if name == "email"
        ));

        ring.prev(&page);
        assert!(matches!(ring.current(), Some(FocusRef::Control { .. })));
    }

    #[test]
    fn skips_disabled_fields() {
        let mut page = demo_page();
        page.form_mut("login-form")
            .expect("form")
            .field_mut("password")
            .expect("field")
            .set_disabled(true);

        let page = page;
        let mut ring = FocusRing::from_page(&page);
        ring.next(&page);
        assert!(matches!(ring.current(), Some(FocusRef::Control { .. })));
    }
}
