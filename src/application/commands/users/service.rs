use std::sync::Arc;

use crate::application::ports::{
    notification::PasswordResetNotifier,
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::ResetTokenGenerator,
};
use crate::domain::{password_reset::PasswordResetTokenRepository, user::UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) reset_token_repo: Arc<dyn PasswordResetTokenRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) reset_tokens: Arc<dyn ResetTokenGenerator>,
    pub(super) notifier: Arc<dyn PasswordResetNotifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        reset_token_repo: Arc<dyn PasswordResetTokenRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        reset_tokens: Arc<dyn ResetTokenGenerator>,
        notifier: Arc<dyn PasswordResetNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            reset_token_repo,
            password_hasher,
            token_manager,
            reset_tokens,
            notifier,
            clock,
        }
    }
}
