pub mod login;
pub mod profile;
pub mod rating;
pub mod register;
pub mod watchlist;

pub use login::LoginHandler;
pub use profile::ProfileHandler;
pub use rating::RatingHandler;
pub use register::RegisterHandler;
pub use watchlist::WatchlistHandler;

use crate::page::Page;
use crate::submit::completion::SubmitCompletion;
use crate::submit::request::SubmitRequest;

pub const PASSWORD_MIN_LEN: usize = 4;
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";

pub fn password_length_message() -> String {
    format!("Password must be at least {PASSWORD_MIN_LEN} characters.")
}

/// What a trigger resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Validation failed or the control is busy; nothing leaves the page.
    Blocked,
    /// Validation passed and the form's native action may proceed.
    Proceed,
    /// One asynchronous submission was started; the triggering control has
    /// been disabled.
    Dispatch(SubmitRequest),
}

/// One bound handler: listener, validation and optional submission for a
/// single form or a delegated set of buttons.
///
/// Handlers are independent of each other; each mutates only the elements
/// it was constructed with.
pub trait Handler: Send {
    /// Stable id completions are routed back by.
    fn id(&self) -> &str;

    /// React to the bound element firing. `target` is the element the event
    /// hit; for direct bindings it equals the bound form's id.
    fn on_trigger(&mut self, page: &mut Page, target: &str) -> Trigger;

    /// Apply a resolved submission outcome. Handlers that never dispatch do
    /// not receive completions.
    fn on_completion(&mut self, _page: &mut Page, _completion: &SubmitCompletion) {}
}
