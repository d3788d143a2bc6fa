//! Urlencoded HTML form adapters.
//!
//! Each form deserializes the raw submission, `clean()`s it into a command
//! or a plain value, and reports failures per field with non-field messages
//! under `__all__`. `describe()` lists the fields with their widget hints.

mod articles;
mod fields;
mod newsletters;
mod password;
mod search;
mod subscriptions;
mod users;
mod widgets;

pub use crate::application::error::FieldErrors as FormErrors;
pub use articles::{ArticleApprovalForm, ArticleForm, CleanedArticle};
pub use fields::{FormChoices, INVALID_CHOICE, REQUIRED};
pub use newsletters::NewsletterForm;
pub use password::{ForgotPasswordForm, PASSWORD_MISMATCH, ResetPasswordForm};
pub use search::{CleanedSearch, SearchForm};
pub use subscriptions::{BOTH_TARGETS, NEITHER_TARGET, SubscriptionForm};
pub use users::UserRegistrationForm;
pub use widgets::{
    ChoiceOption, ChoiceScope, Choices, FieldDescription, FormDescription, WidgetKind,
};
