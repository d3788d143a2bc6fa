//! JSON write payloads for the REST API. Read shapes are the application
//! DTOs; these types validate incoming bodies before a command is built.

mod articles;
mod newsletters;
mod subscriptions;
mod users;

pub use articles::{ArticleUpdateWrite, ArticleWrite};
pub use newsletters::NewsletterWrite;
pub use subscriptions::{BOTH_TARGETS, NEITHER_TARGET, SubscriptionWrite};
pub use users::UserWrite;

use crate::application::error::FieldErrors;

pub(crate) const BLANK: &str = "This field may not be blank.";

pub(crate) fn not_blank(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, BLANK);
    }
}

pub(crate) fn max_chars(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("Ensure this field has no more than {max} characters."),
        );
    }
}
