// tests/support/mocks/notification.rs
use async_trait::async_trait;
use newsdesk::application::{
    ApplicationResult,
    ports::{notification::PasswordResetNotifier, util::ResetTokenGenerator},
};
use newsdesk::domain::{password_reset::ResetTokenValue, user::User};
use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

/// Captures `(email, token)` pairs instead of sending anything.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_token(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, token)| token.clone())
    }
}

#[async_trait]
impl PasswordResetNotifier for RecordingNotifier {
    async fn send_reset_link(&self, user: &User, token: &ResetTokenValue) -> ApplicationResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((user.email.to_string(), token.as_str().to_string()));
        Ok(())
    }
}

/// Predictable `reset-token-<n>` values.
#[derive(Debug, Default)]
pub struct SequentialResetTokens {
    next: AtomicU64,
}

impl ResetTokenGenerator for SequentialResetTokens {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("reset-token-{n}")
    }
}
