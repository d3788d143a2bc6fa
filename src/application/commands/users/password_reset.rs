use super::{UserCommandService, password::validate_password};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        password_reset::{NewPasswordResetToken, ResetTokenValue},
        user::{Email, PasswordHash, UserUpdate},
    },
};

#[derive(Debug)]
pub struct RequestPasswordResetCommand {
    pub email: String,
}

pub struct ResetPasswordCommand {
    pub token: String,
    pub new_password: String,
}

impl UserCommandService {
    /// Issue a reset token and hand the link to the notifier. Succeeds
    /// silently when no account uses the address.
    pub async fn request_password_reset(
        &self,
        command: RequestPasswordResetCommand,
    ) -> ApplicationResult<()> {
        let email = Email::new(command.email)?;
        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::debug!("password reset requested for unknown email");
            return Ok(());
        };

        let token = ResetTokenValue::new(self.reset_tokens.generate())?;
        let created = self
            .reset_token_repo
            .insert(NewPasswordResetToken {
                user_id: user.id,
                token,
                created_at: self.clock.now(),
            })
            .await?;

        self.notifier.send_reset_link(&user, &created.token).await?;
        tracing::info!(user_id = %user.id, "password reset token issued");
        Ok(())
    }

    pub async fn reset_password(&self, command: ResetPasswordCommand) -> ApplicationResult<()> {
        let value = ResetTokenValue::new(command.token)
            .map_err(|_| ApplicationError::not_found("reset link is invalid"))?;
        let token = self
            .reset_token_repo
            .find_by_token(&value)
            .await?
            .ok_or_else(|| ApplicationError::not_found("reset link is invalid"))?;

        if token.is_expired(self.clock.now()) {
            return Err(ApplicationError::validation(
                "reset link has expired or was already used",
            ));
        }
        validate_password(&command.new_password)?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let update = UserUpdate::new(token.user_id).with_password_hash(PasswordHash::new(hashed)?);
        self.user_repo.update(update).await?;
        self.reset_token_repo.mark_used(token.id).await?;

        tracing::info!(user_id = %token.user_id, "password reset completed");
        Ok(())
    }
}
