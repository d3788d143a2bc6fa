use std::sync::Arc;

use crate::{
    application::{
        assembler::DtoAssembler,
        dto::{AuthenticatedUser, SubscriptionDto},
        error::ApplicationResult,
    },
    domain::subscription::SubscriptionRepository,
};

pub struct SubscriptionQueryService {
    repo: Arc<dyn SubscriptionRepository>,
    assembler: Arc<DtoAssembler>,
}

impl SubscriptionQueryService {
    pub fn new(repo: Arc<dyn SubscriptionRepository>, assembler: Arc<DtoAssembler>) -> Self {
        Self { repo, assembler }
    }

    /// The caller's subscriptions, newest first.
    pub async fn list_subscriptions(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<SubscriptionDto>> {
        let mut items = Vec::new();
        for subscription in self.repo.list_for_user(actor.id).await? {
            items.push(self.assembler.subscription(subscription).await?);
        }
        Ok(items)
    }
}
