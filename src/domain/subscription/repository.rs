use crate::domain::errors::DomainResult;
use crate::domain::subscription::entity::{NewSubscription, Subscription, SubscriptionId};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the user already follows the
    /// same target.
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<Subscription>;
    async fn find_by_id(&self, id: SubscriptionId) -> DomainResult<Option<Subscription>>;
    async fn delete(&self, id: SubscriptionId) -> DomainResult<()>;
    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<Subscription>>;
}
