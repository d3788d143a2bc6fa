// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use crate::domain::{password_reset::ResetTokenValue, user::User};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordResetNotifier: Send + Sync {
    async fn send_reset_link(&self, user: &User, token: &ResetTokenValue) -> ApplicationResult<()>;
}
