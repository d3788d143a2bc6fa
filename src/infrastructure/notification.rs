// src/infrastructure/notification.rs
use crate::{
    application::{ApplicationResult, ports::notification::PasswordResetNotifier},
    domain::{password_reset::ResetTokenValue, user::User},
};
use async_trait::async_trait;

/// Writes reset links to the log instead of sending mail.
#[derive(Clone)]
pub struct LoggingResetNotifier {
    base_url: String,
}

impl LoggingResetNotifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn reset_link(&self, token: &ResetTokenValue) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), token.as_str())
    }
}

#[async_trait]
impl PasswordResetNotifier for LoggingResetNotifier {
    async fn send_reset_link(&self, user: &User, token: &ResetTokenValue) -> ApplicationResult<()> {
        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            link = %self.reset_link(token),
            "password reset link"
        );
        Ok(())
    }
}
