use crate::core::ElementId;
use crate::handlers::{Handler, Trigger};
use crate::page::Page;
use crate::submit::completion::SubmitCompletion;
use crate::submit::request::SubmitRequest;

pub const CHOOSE_RATING_FIRST: &str = "Please choose a rating first.";
pub const THANKS_FOR_RATING: &str = "Thank you for your rating!";
pub const RATING_SEND_FAILED: &str = "Could not reach the server. Please try again.";

const RATING_FIELD: &str = "rating";

/// One-shot rating submission for a single rating form. A successful
/// attempt retires the form: the selector and control stay disabled.
pub struct RatingHandler {
    form_id: ElementId,
}

impl RatingHandler {
    pub fn new(form_id: impl Into<ElementId>) -> Self {
        Self {
            form_id: form_id.into(),
        }
    }
}

impl Handler for RatingHandler {
    fn id(&self) -> &str {
        self.form_id.as_str()
    }

    fn on_trigger(&mut self, page: &mut Page, _target: &str) -> Trigger {
        let Some(form) = page.form_mut(self.form_id.as_str()) else {
            return Trigger::Blocked;
        };

        // A disabled control means a request is in flight or the rating is
        // already recorded; nothing may leave the page.
        if !form.control().can_trigger() {
            return Trigger::Blocked;
        }

        form.feedback_mut().clear();
        form.clear_field_errors();

        let selected = form
            .field(RATING_FIELD)
            .map(|field| field.value().to_string())
            .unwrap_or_default();
        if selected.is_empty() {
            if let Some(field) = form.field_mut(RATING_FIELD) {
                field.mark_error();
            }
            form.feedback_mut().show_error(CHOOSE_RATING_FIRST);
            return Trigger::Blocked;
        }

        let request = SubmitRequest::new(
            self.form_id.clone(),
            self.form_id.clone(),
            form.action().to_string(),
        )
        .with_payload(form.payload());
        form.control_mut().begin_pending();
        Trigger::Dispatch(request)
    }

    fn on_completion(&mut self, page: &mut Page, completion: &SubmitCompletion) {
        let Some(form) = page.form_mut(self.form_id.as_str()) else {
            return;
        };

        if completion.is_ok() {
            form.feedback_mut().show_success(THANKS_FOR_RATING);
            if let Some(field) = form.field_mut(RATING_FIELD) {
                field.set_disabled(true);
            }
            form.control_mut().succeed();
        } else {
            form.feedback_mut().show_error(RATING_SEND_FAILED);
            form.control_mut().fail();
        }
    }
}
