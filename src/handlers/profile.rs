use crate::core::ElementId;
use crate::core::validation::{FormRule, fields_match};
use crate::handlers::{Handler, Trigger};
use crate::page::Page;

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

const NEW_PASSWORD: &str = "new_password";
const CONFIRM_PASSWORD: &str = "confirm_password";

/// Gates the profile form: changing the password is optional, but a
/// non-empty new password must equal its confirmation.
pub struct ProfileHandler {
    form_id: ElementId,
    rule: FormRule,
}

impl ProfileHandler {
    pub fn new(form_id: impl Into<ElementId>) -> Self {
        Self {
            form_id: form_id.into(),
            rule: fields_match(NEW_PASSWORD, CONFIRM_PASSWORD, PASSWORDS_DO_NOT_MATCH),
        }
    }
}

impl Handler for ProfileHandler {
    fn id(&self) -> &str {
        self.form_id.as_str()
    }

    fn on_trigger(&mut self, page: &mut Page, _target: &str) -> Trigger {
        let Some(form) = page.form_mut(self.form_id.as_str()) else {
            return Trigger::Blocked;
        };

        let values = form.values();
        match (self.rule)(&values) {
            Some(violation) => {
                form.feedback_mut().show_error(violation.message);
                if let Some(field) = form.field_mut(&violation.field) {
                    field.mark_error();
                }
                Trigger::Blocked
            }
            None => {
                form.feedback_mut().clear();
                if let Some(field) = form.field_mut(CONFIRM_PASSWORD) {
                    field.clear_error();
                }
                Trigger::Proceed
            }
        }
    }
}
