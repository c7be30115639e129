use crate::handlers::{Handler, Trigger};
use crate::page::Page;
use crate::submit::completion::{ResponseParse, SubmitCompletion};
use crate::submit::request::SubmitRequest;
use tracing::warn;

pub const WATCHLIST_CLASS: &str = "watchlist-btn";
pub const ACTIVE_CLASS: &str = "active";
pub const ADDED_LABEL: &str = "✓ Added";
pub const ERROR_LABEL: &str = "Error";

const HANDLER_ID: &str = "watchlist";
const MOVIE_ID: &str = "movie_id";

/// Delegated watchlist toggle. One handler serves every button carrying the
/// watchlist class, including buttons rendered after binding; each click
/// posts the button's movie id and flips the button on the reply.
pub struct WatchlistHandler {
    endpoint: String,
}

impl WatchlistHandler {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Handler for WatchlistHandler {
    fn id(&self) -> &str {
        HANDLER_ID
    }

    fn on_trigger(&mut self, page: &mut Page, target: &str) -> Trigger {
        let Some(button) = page.button_mut(target) else {
            return Trigger::Blocked;
        };
        if button.is_disabled() {
            return Trigger::Blocked;
        }
        let Some(movie_id) = button.data(MOVIE_ID) else {
            warn!(button = target, "watchlist button has no movie id");
            return Trigger::Blocked;
        };

        let request = SubmitRequest::new(HANDLER_ID, target, self.endpoint.clone())
            .with_field(MOVIE_ID, movie_id)
            .with_parse(ResponseParse::Json);
        button.set_disabled(true);
        Trigger::Dispatch(request)
    }

    fn on_completion(&mut self, page: &mut Page, completion: &SubmitCompletion) {
        let Some(button) = page.button_mut(completion.origin.as_str()) else {
            return;
        };

        if completion.is_ok() {
            match completion.json_str("status") {
                Some("added") => {
                    button.set_label(ADDED_LABEL);
                    button.add_class(ACTIVE_CLASS);
                }
                Some("removed") => {
                    button.restore_label();
                    button.remove_class(ACTIVE_CLASS);
                }
                _ => {}
            }
        } else {
            warn!(
                origin = %completion.origin,
                error = completion.error.as_deref().unwrap_or("unknown"),
                "watchlist toggle failed"
            );
            button.set_label(ERROR_LABEL);
        }

        // The toggle is repeatable either way; only the in-flight window
        // keeps the button disabled.
        button.set_disabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::{ACTIVE_CLASS, ADDED_LABEL, ERROR_LABEL, WATCHLIST_CLASS, WatchlistHandler};
    use crate::handlers::{Handler, Trigger};
    use crate::page::{Page, PageButton};
    use crate::submit::completion::SubmitCompletion;

    fn page_with_button() -> Page {
        let mut page = Page::new();
        page.add_button(
            PageButton::new("watchlist-3", "Add to watchlist")
                .with_class(WATCHLIST_CLASS)
                .with_data("movie_id", "3"),
        );
        page
    }

    fn json_completion(origin: &str, body: &str) -> SubmitCompletion {
        SubmitCompletion {
            handler: "watchlist".into(),
            origin: origin.into(),
            status: Some(200),
            body: body.to_string(),
            value: serde_json::from_str(body).ok(),
            error: None,
        }
    }

    fn failed_completion(origin: &str) -> SubmitCompletion {
        SubmitCompletion {
            handler: "watchlist".into(),
            origin: origin.into(),
            status: None,
            body: String::new(),
            value: None,
            error: Some("connection refused".to_string()),
        }
    }

    #[test]
    fn click_dispatches_the_movie_id_and_disables_the_button() {
        let mut page = page_with_button();
        let mut handler = WatchlistHandler::new("http://localhost/toggle_watchlist");

        let trigger = handler.on_trigger(&mut page, "watchlist-3");
        let Trigger::Dispatch(request) = trigger else {
            panic!("expected a dispatch, got {trigger:?}");
        };
        assert_eq!(request.body(), "movie_id=3");
        assert!(page.button("watchlist-3").expect("button").is_disabled());
    }

    #[test]
    fn a_second_click_while_pending_is_blocked() {
        let mut page = page_with_button();
        let mut handler = WatchlistHandler::new("http://localhost/toggle_watchlist");

        assert!(matches!(
            handler.on_trigger(&mut page, "watchlist-3"),
            Trigger::Dispatch(_)
        ));
        assert_eq!(
            handler.on_trigger(&mut page, "watchlist-3"),
            Trigger::Blocked
        );
    }

    #[test]
    fn added_then_removed_is_a_pure_flip() {
        let mut page = page_with_button();
        let mut handler = WatchlistHandler::new("http://localhost/toggle_watchlist");
        handler.on_trigger(&mut page, "watchlist-3");

        handler.on_completion(&mut page, &json_completion("watchlist-3", r#"{"status":"added"}"#));
        {
            let button = page.button("watchlist-3").expect("button");
            assert_eq!(button.label(), ADDED_LABEL);
            assert!(button.has_class(ACTIVE_CLASS));
            assert!(!button.is_disabled());
        }

        handler.on_trigger(&mut page, "watchlist-3");
        handler.on_completion(
            &mut page,
            &json_completion("watchlist-3", r#"{"status":"removed"}"#),
        );
        let button = page.button("watchlist-3").expect("button");
        assert_eq!(button.label(), "Add to watchlist");
        assert!(!button.has_class(ACTIVE_CLASS));
        assert!(!button.is_disabled());
    }

    #[test]
    fn network_failure_shows_the_error_marker_and_reenables() {
        let mut page = page_with_button();
        let mut handler = WatchlistHandler::new("http://localhost/toggle_watchlist");
        handler.on_trigger(&mut page, "watchlist-3");

        handler.on_completion(&mut page, &failed_completion("watchlist-3"));

        let button = page.button("watchlist-3").expect("button");
        assert_eq!(button.label(), ERROR_LABEL);
        assert!(!button.is_disabled());
    }

    #[test]
    fn unknown_status_leaves_the_label_but_reenables() {
        let mut page = page_with_button();
        let mut handler = WatchlistHandler::new("http://localhost/toggle_watchlist");
        handler.on_trigger(&mut page, "watchlist-3");

        handler.on_completion(
            &mut page,
            &json_completion("watchlist-3", r#"{"status":"pending"}"#),
        );

        let button = page.button("watchlist-3").expect("button");
        assert_eq!(button.label(), "Add to watchlist");
        assert!(!button.is_disabled());
    }

    #[test]
    fn buttons_without_a_movie_id_never_dispatch() {
        let mut page = Page::new();
        page.add_button(PageButton::new("watchlist-x", "Add").with_class(WATCHLIST_CLASS));
        let mut handler = WatchlistHandler::new("http://localhost/toggle_watchlist");

        assert_eq!(
            handler.on_trigger(&mut page, "watchlist-x"),
            Trigger::Blocked
        );
        assert!(!page.button("watchlist-x").expect("button").is_disabled());
    }
}
