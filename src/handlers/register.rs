use crate::core::ElementId;
use crate::core::validation::{FieldRule, first_violation, min_length, required};
use crate::handlers::{FILL_ALL_FIELDS, Handler, PASSWORD_MIN_LEN, Trigger, password_length_message};
use crate::page::Page;

/// Gates the registration form's native submission; same rules as login
/// with the name field added.
pub struct RegisterHandler {
    form_id: ElementId,
    rules: Vec<FieldRule>,
}

impl RegisterHandler {
    pub fn new(form_id: impl Into<ElementId>) -> Self {
        Self {
            form_id: form_id.into(),
            rules: vec![
                FieldRule::new("name", required(FILL_ALL_FIELDS)),
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

impl Handler for RegisterHandler {
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

#[cfg(test)]
mod tests {
    use super::RegisterHandler;
    use crate::core::field::Field;
    use crate::core::form::Form;
    use crate::handlers::{FILL_ALL_FIELDS, Handler, Trigger};
    use crate::page::Page;

    fn page_with_register(name: &str, email: &str, password: &str) -> Page {
        let mut page = Page::new();
        page.add_form(
            Form::new("register-form", "/register")
                .with_field(Field::text("name", "Name").with_value(name))
                .with_field(Field::text("email", "Email").with_value(email))
                .with_field(Field::password("password", "Password").with_value(password)),
        );
        page
    }

    #[test]
    fn missing_name_blocks_first() {
        let mut page = page_with_register("", "", "abc");
        let mut handler = RegisterHandler::new("register-form");

        assert_eq!(
            handler.on_trigger(&mut page, "register-form"),
            Trigger::Blocked
        );
        let feedback = page.form("register-form").expect("form").feedback();
        assert_eq!(feedback.message(), FILL_ALL_FIELDS);
    }

    #[test]
    fn complete_registration_proceeds() {
        let mut page = page_with_register("Sam", "sam@example.com", "abcd");
        let mut handler = RegisterHandler::new("register-form");

        assert_eq!(
            handler.on_trigger(&mut page, "register-form"),
            Trigger::Proceed
        );
    }

    #[test]
    fn short_password_still_fails_after_required_checks() {
        let mut page = page_with_register("Sam", "sam@example.com", "abc");
        let mut handler = RegisterHandler::new("register-form");

        assert_eq!(
            handler.on_trigger(&mut page, "register-form"),
            Trigger::Blocked
        );
        let feedback = page.form("register-form").expect("form").feedback();
        assert_eq!(feedback.message(), "Password must be at least 4 characters.");
    }
}
