use crate::core::ElementId;
use crate::core::validation::{FieldRule, first_violation, min_length, required};
use crate::handlers::{FILL_ALL_FIELDS, Handler, PASSWORD_MIN_LEN, Trigger, password_length_message};
use crate::page::Page;

/// Gates the login form's native submission: no network call of its own,
/// only field checks against the values read at submit time.
pub struct LoginHandler {
    form_id: ElementId,
    rules: Vec<FieldRule>,
}

impl LoginHandler {
    pub fn new(form_id: impl Into<ElementId>) -> Self {
        Self {
            form_id: form_id.into(),
            rules: vec![
                FieldRule::new("email", required(FILL_ALL_FIELDS)),
                FieldRule::new("password", required(FILL_ALL_FIELDS)),
                FieldRule::new(
                    "password",
                    min_length(PASSWORD_MIN_LEN, password_length_message()),
                ),
            ],
        }
    }
}

impl Handler for LoginHandler {
    fn id(&self) -> &str {
        self.form_id.as_str()
    }

    fn on_trigger(&mut self, page: &mut Page, _target: &str) -> Trigger {
        let Some(form) = page.form_mut(self.form_id.as_str()) else {
            return Trigger::Blocked;
        };

        let values = form.values();
        match first_violation(&self.rules, &values) {
            Some(violation) => {
                form.feedback_mut().show_error(violation.message);
                Trigger::Blocked
            }
            None => {
                form.feedback_mut().clear();
                Trigger::Proceed
            }
        }
    }
}
