use crate::domain::errors::DomainResult;
use crate::domain::password_reset::entity::{
    NewPasswordResetToken, PasswordResetToken, ResetTokenValue,
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordResetTokenRepository: Send + Sync {
    async fn insert(&self, token: NewPasswordResetToken) -> DomainResult<PasswordResetToken>;
    async fn find_by_token(&self, token: &ResetTokenValue)
    -> DomainResult<Option<PasswordResetToken>>;
    async fn mark_used(&self, id: i64) -> DomainResult<()>;
}
