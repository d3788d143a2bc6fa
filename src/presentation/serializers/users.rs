use super::max_chars;
use crate::application::commands::users::UpdateProfileCommand;
use crate::application::error::FieldErrors;
use crate::domain::user::Email;
use serde::Deserialize;
use utoipa::ToSchema;

const NAME_MAX_LENGTH: usize = 30;

/// Profile fields a user may edit on their own account.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserWrite {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserWrite {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(email) = &self.email {
            if Email::new(email.as_str()).is_err() {
                errors.add("email", "Enter a valid email address.");
            }
        }
        if let Some(first_name) = &self.first_name {
            max_chars(&mut errors, "first_name", first_name, NAME_MAX_LENGTH);
        }
        if let Some(last_name) = &self.last_name {
            max_chars(&mut errors, "last_name", last_name, NAME_MAX_LENGTH);
        }
        errors.into_result(())
    }

    pub fn into_command(self) -> UpdateProfileCommand {
        UpdateProfileCommand {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}
