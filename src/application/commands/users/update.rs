use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, UserUpdate},
};

/// Profile fields a user may change on their own account.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        if command.email.is_none() && command.first_name.is_none() && command.last_name.is_none()
        {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let mut update = UserUpdate::new(actor.id);
        if let Some(email) = command.email {
            update = update.with_email(Email::new(email)?);
        }
        if let Some(first_name) = command.first_name {
            update = update.with_first_name(first_name);
        }
        if let Some(last_name) = command.last_name {
            update = update.with_last_name(last_name);
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}
