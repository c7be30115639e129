use crate::config::SiteConfig;
use crate::core::control::SubmitControl;
use crate::core::field::Field;
use crate::core::form::Form;
use crate::handlers::watchlist::WATCHLIST_CLASS;
use crate::handlers::{
    Handler, LoginHandler, ProfileHandler, RatingHandler, RegisterHandler, WatchlistHandler,
};
use crate::page::binder::{Binder, class_matcher};
use crate::page::{Page, PageButton};

pub const LOGIN_FORM: &str = "login-form";
pub const REGISTER_FORM: &str = "register-form";
pub const PROFILE_FORM: &str = "edit-profile-form";

/// Build the demo page: the three account forms plus a rating form and a
/// watchlist button per configured movie, each bound to its handler.
pub fn build(config: &SiteConfig) -> (Page, Vec<Box<dyn Handler>>, Binder) {
    let mut page = Page::new();
    let mut handlers: Vec<Box<dyn Handler>> = Vec::new();
    let mut binder = Binder::new();

    page.add_form(
        Form::new(LOGIN_FORM, config.endpoint("/login"))
            .with_title("Sign in")
            .with_field(Field::text("email", "Email").with_placeholder("you@example.com"))
            .with_field(Field::password("password", "Password"))
            .with_control(SubmitControl::new("Sign in")),
    );
    handlers.push(Box::new(LoginHandler::new(LOGIN_FORM)));
    binder.bind_element(LOGIN_FORM, handlers.len() - 1);

    page.add_form(
        Form::new(REGISTER_FORM, config.endpoint("/register"))
            .with_title("Create account")
            .with_field(Field::text("name", "Name"))
            .with_field(Field::text("email", "Email").with_placeholder("you@example.com"))
            .with_field(Field::password("password", "Password"))
            .with_control(SubmitControl::new("Create account")),
    );
    handlers.push(Box::new(RegisterHandler::new(REGISTER_FORM)));
    binder.bind_element(REGISTER_FORM, handlers.len() - 1);

    page.add_form(
        Form::new(PROFILE_FORM, config.endpoint("/update_profile"))
            .with_title("Edit profile")
            .with_field(Field::text("name", "Name"))
            .with_field(Field::password("new_password", "New password"))
            .with_field(Field::password("confirm_password", "Confirm password"))
            .with_control(SubmitControl::new("Save changes")),
    );
    handlers.push(Box::new(ProfileHandler::new(PROFILE_FORM)));
    binder.bind_element(PROFILE_FORM, handlers.len() - 1);

    for movie in &config.movies {
        let form_id = format!("rating-{}", movie.id);
        page.add_form(
            Form::new(form_id.as_str(), config.endpoint("/rate"))
                .with_title(format!("Rate: {}", movie.title))
                .with_field(Field::hidden("movie_id", movie.id.to_string()))
                .with_field(
                    Field::select("rating", "Rating", (1..=5).map(|n| n.to_string()).collect())
                        .with_placeholder("(choose)"),
                )
                .with_control(
                    SubmitControl::new("Submit rating")
                        .with_pending_label("Sending…")
                        .with_done_label("Rated"),
                ),
        );
        handlers.push(Box::new(RatingHandler::new(form_id.as_str())));
        binder.bind_element(form_id.as_str(), handlers.len() - 1);

        page.add_button(
            PageButton::new(format!("watchlist-{}", movie.id), "Add to watchlist")
                .with_class(WATCHLIST_CLASS)
                .with_data("movie_id", movie.id.to_string()),
        );
    }

    handlers.push(Box::new(WatchlistHandler::new(
        config.endpoint("/toggle_watchlist"),
    )));
    binder.bind_delegated(class_matcher(WATCHLIST_CLASS), handlers.len() - 1);

    (page, handlers, binder)
}
