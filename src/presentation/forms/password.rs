use super::FormErrors;
use super::fields::{check_max_length, check_min_length, domain_field, required_secret, required_text};
use super::widgets::{FieldDescription, FormDescription, WidgetKind};
use crate::application::commands::users::{MIN_PASSWORD_LENGTH, RequestPasswordResetCommand};
use crate::application::error::FORM_NON_FIELD_ERRORS;
use crate::domain::user::Email;
use serde::Deserialize;

pub const PASSWORD_MISMATCH: &str = "Passwords don't match";
const EMAIL_MAX_LENGTH: usize = 254;

/// Checks a new password and its confirmation. The length rule applies to the
/// first field only; the pair is compared when both fields survived.
pub(crate) fn clean_password_pair(
    errors: &mut FormErrors,
    first: (&str, &str),
    second: (&str, &str),
) -> Option<String> {
    let (first_field, first_raw) = first;
    let (second_field, second_raw) = second;

    let password1 = required_secret(errors, first_field, first_raw)
        .filter(|value| check_min_length(errors, first_field, value, MIN_PASSWORD_LENGTH));
    let password2 = required_secret(errors, second_field, second_raw);

    match (password1, password2) {
        (Some(password1), Some(password2)) if password1 == password2 => Some(password1),
        (Some(_), Some(_)) => {
            errors.add(FORM_NON_FIELD_ERRORS, PASSWORD_MISMATCH);
            None
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn clean(&self) -> Result<RequestPasswordResetCommand, FormErrors> {
        let mut errors = FormErrors::new();
        let email = required_text(&mut errors, "email", &self.email)
            .filter(|value| check_max_length(&mut errors, "email", value, EMAIL_MAX_LENGTH))
            .and_then(|value| domain_field(&mut errors, "email", Email::new(value)));

        match email {
            Some(email) => errors.into_result(RequestPasswordResetCommand {
                email: email.into(),
            }),
            None => Err(errors),
        }
    }

    pub fn describe() -> FormDescription {
        FormDescription::new(
            "forgot_password",
            vec![
                FieldDescription::new("email", "Email", WidgetKind::Email)
                    .max_length(EMAIL_MAX_LENGTH)
                    .placeholder("Enter your email address"),
            ],
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetPasswordForm {
    #[serde(default)]
    pub new_password1: String,
    #[serde(default)]
    pub new_password2: String,
}

impl ResetPasswordForm {
    pub fn new(new_password1: impl Into<String>, new_password2: impl Into<String>) -> Self {
        Self {
            new_password1: new_password1.into(),
            new_password2: new_password2.into(),
        }
    }

    /// The confirmed new password.
    pub fn clean(&self) -> Result<String, FormErrors> {
        let mut errors = FormErrors::new();
        let password = clean_password_pair(
            &mut errors,
            ("new_password1", &self.new_password1),
            ("new_password2", &self.new_password2),
        );
        match password {
            Some(password) => errors.into_result(password),
            None => Err(errors),
        }
    }

    pub fn describe() -> FormDescription {
        FormDescription::new(
            "reset_password",
            vec![
                FieldDescription::new("new_password1", "New password", WidgetKind::Password)
                    .min_length(MIN_PASSWORD_LENGTH)
                    .placeholder("Enter new password"),
                FieldDescription::new("new_password2", "Confirm new password", WidgetKind::Password)
                    .placeholder("Confirm new password"),
            ],
        )
    }
}
