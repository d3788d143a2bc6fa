use crate::domain::errors::DomainResult;
use crate::domain::publisher::entity::{MembershipKind, NewPublisher, Publisher};
use crate::domain::publisher::value_objects::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher>;
    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>>;
    /// All publishers ordered by name, members included.
    async fn list(&self) -> DomainResult<Vec<Publisher>>;
    async fn add_member(
        &self,
        id: PublisherId,
        user_id: UserId,
        kind: MembershipKind,
    ) -> DomainResult<Publisher>;
}
