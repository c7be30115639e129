pub mod focus;
pub mod site;

use crate::config::SiteConfig;
use crate::core::field::FieldKind;
use crate::handlers::{Handler, Trigger};
use crate::page::binder::Binder;
use crate::page::{FocusRef, Page, PageEvent};
use crate::submit::completion::SubmitCompletion;
use crate::submit::executor::SubmitExecutor;
use crate::submit::request::SubmitRequest;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::renderer;
use crate::ui::span::SpanLine;
use tracing::debug;

/// Routing id for the gated native submissions the app performs on behalf
/// of the login/register/profile forms; their outcome is a status line,
/// not a handler callback.
const NATIVE_HANDLER: &str = "native";

pub struct App {
    page: Page,
    handlers: Vec<Box<dyn Handler>>,
    binder: Binder,
    executor: SubmitExecutor,
    focus: focus::FocusRing,
    should_exit: bool,
}

impl App {
    pub fn new(config: &SiteConfig) -> Self {
        let (page, handlers, binder) = site::build(config);
        let focus = focus::FocusRing::from_page(&page);
        Self {
            page,
            handlers,
            binder,
            executor: SubmitExecutor::new(),
            focus,
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn render_lines(&self, width: u16) -> Vec<SpanLine> {
        renderer::render(&self.page, self.focus.current(), width)
    }

    /// Route one key press. Returns whether the frame needs a redraw.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc || (key.ctrl && key.code == KeyCode::Char('c')) {
            self.should_exit = true;
            return false;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next(&self.page);
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.prev(&self.page);
                true
            }
            KeyCode::Enter => {
                self.activate_focused();
                true
            }
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Left | KeyCode::Right => {
                self.edit_focused(key)
            }
            _ => false,
        }
    }

    /// Drain resolved submissions and apply them in arrival order.
    pub fn tick(&mut self) -> bool {
        let completions = self.executor.drain_ready();
        let changed = !completions.is_empty();
        for completion in completions {
            self.apply_completion(completion);
        }
        changed
    }

    fn edit_focused(&mut self, key: KeyEvent) -> bool {
        let Some(FocusRef::Field { form, name }) = self.focus.current().cloned() else {
            return false;
        };
        let Some(field) = self
            .page
            .form_mut(form.as_str())
            .and_then(|form| form.field_mut(&name))
        else {
            return false;
        };

        let is_select = matches!(field.kind(), FieldKind::Select { .. });
        match key.code {
            KeyCode::Left if is_select => field.select_prev(),
            KeyCode::Right if is_select => field.select_next(),
            KeyCode::Char(ch) if !is_select && !key.ctrl => field.push_char(ch),
            KeyCode::Backspace if !is_select => field.pop_char(),
            _ => return false,
        }
        true
    }

    fn activate_focused(&mut self) {
        let event = match self.focus.current() {
            Some(FocusRef::Field { form, .. }) | Some(FocusRef::Control { form }) => {
                Some(PageEvent::Submit { form: form.clone() })
            }
            Some(FocusRef::Button { id }) => Some(PageEvent::Click { target: id.clone() }),
            None => None,
        };
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    /// Deliver a page event to its bound handler. Disabled controls do not
    /// fire, which is what keeps a second request from leaving while one is
    /// outstanding.
    pub fn dispatch(&mut self, event: PageEvent) {
        match &event {
            PageEvent::Submit { form } => {
                let triggerable = self
                    .page
                    .form(form.as_str())
                    .is_some_and(|form| form.control().can_trigger());
                if !triggerable {
                    return;
                }
            }
            PageEvent::Click { target } => {
                let clickable = self
                    .page
                    .button(target.as_str())
                    .is_some_and(|button| !button.is_disabled());
                if !clickable {
                    return;
                }
            }
        }

        let Some(index) = self.binder.resolve(&self.page, &event) else {
            return;
        };
        let target = match &event {
            PageEvent::Submit { form } => form.clone(),
            PageEvent::Click { target } => target.clone(),
        };

        match self.handlers[index].on_trigger(&mut self.page, target.as_str()) {
            Trigger::Blocked => {}
            Trigger::Proceed => self.submit_native(target.as_str()),
            Trigger::Dispatch(request) => {
                debug!(handler = %request.handler, endpoint = %request.endpoint, "dispatching");
                self.executor.spawn(request);
            }
        }
    }

    fn submit_native(&mut self, form_id: &str) {
        let Some(form) = self.page.form(form_id) else {
            return;
        };
        let request = SubmitRequest::new(
            NATIVE_HANDLER,
            form.id().clone(),
            form.action().to_string(),
        )
        .with_payload(form.payload());
        debug!(form = form_id, endpoint = %request.endpoint, "native submission");
        self.executor.spawn(request);
        self.page.set_status(format!("Submitting {form_id}…"));
    }

    pub fn apply_completion(&mut self, completion: SubmitCompletion) {
        if completion.handler.as_str() == NATIVE_HANDLER {
            let line = match (completion.status, &completion.error) {
                (Some(status), _) => format!("{} → HTTP {status}", completion.origin),
                (None, Some(error)) => format!("{} → {error}", completion.origin),
                (None, None) => format!("{} → done", completion.origin),
            };
            self.page.set_status(line);
            return;
        }

        let Some(index) = self
            .handlers
            .iter()
            .position(|handler| handler.id() == completion.handler.as_str())
        else {
            debug!(handler = %completion.handler, "completion for unknown handler");
            return;
        };
        self.handlers[index].on_completion(&mut self.page, &completion);
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::config::SiteConfig;
    use crate::submit::completion::SubmitCompletion;
    use crate::terminal::{KeyCode, KeyEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, ctrl: false }
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let config = SiteConfig::default();
        let mut app = App::new(&config);

        for ch in "a@b.co".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }

        let form = app.page().form("login-form").expect("form");
        assert_eq!(form.field("email").expect("field").value(), "a@b.co");
    }

    #[test]
    fn native_completions_become_a_status_line() {
        let config = SiteConfig::default();
        let mut app = App::new(&config);

        app.apply_completion(SubmitCompletion {
            handler: "native".into(),
            origin: "login-form".into(),
            status: Some(303),
            body: String::new(),
            value: None,
            error: None,
        });

        assert_eq!(app.page().status(), Some("login-form → HTTP 303"));
    }

    #[test]
    fn rating_completions_route_to_the_matching_form() {
        let config = SiteConfig::default();
        let mut app = App::new(&config);
        let first = config.movies.first().expect("movies");
        let form_id = format!("rating-{}", first.id);

        app.apply_completion(SubmitCompletion {
            handler: form_id.as_str().into(),
            origin: form_id.as_str().into(),
            status: None,
            body: String::new(),
            value: None,
            error: Some("connection refused".to_string()),
        });

        let form = app.page().form(&form_id).expect("form");
        assert!(form.feedback().is_visible());
        assert!(form.control().can_trigger());
    }

    #[test]
    fn esc_requests_exit() {
        let config = SiteConfig::default();
        let mut app = App::new(&config);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_exit());
    }
}
