// src/application/commands/subscriptions.rs
use std::sync::Arc;

use super::ensure_capability;
use crate::{
    application::{
        assembler::DtoAssembler,
        dto::{AuthenticatedUser, SubscriptionDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        publisher::PublisherId,
        subscription::{NewSubscription, SubscriptionId, SubscriptionRepository, SubscriptionTarget},
        user::UserId,
    },
};

/// Exactly one of the two ids must be present.
#[derive(Debug, Default)]
pub struct SubscribeCommand {
    pub publisher_id: Option<i64>,
    pub journalist_id: Option<i64>,
}

pub struct SubscriptionCommandService {
    repo: Arc<dyn SubscriptionRepository>,
    assembler: Arc<DtoAssembler>,
    clock: Arc<dyn Clock>,
}

impl SubscriptionCommandService {
    pub fn new(
        repo: Arc<dyn SubscriptionRepository>,
        assembler: Arc<DtoAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            assembler,
            clock,
        }
    }

    pub async fn subscribe(
        &self,
        actor: &AuthenticatedUser,
        command: SubscribeCommand,
    ) -> ApplicationResult<SubscriptionDto> {
        ensure_capability(actor, "subscriptions", "manage")?;

        let publisher = command.publisher_id.map(PublisherId::new).transpose()?;
        let journalist = command.journalist_id.map(UserId::new).transpose()?;
        let target = SubscriptionTarget::from_parts(publisher, journalist)?;

        let created = self
            .repo
            .insert(NewSubscription {
                user_id: actor.id,
                target,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(
            user_id = %actor.id,
            subscription_id = created.id.0,
            "subscription created"
        );
        self.assembler.subscription(created).await
    }

    /// Remove one of the caller's own subscriptions.
    pub async fn unsubscribe(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_capability(actor, "subscriptions", "manage")?;

        let id = SubscriptionId::new(id)?;
        match self.repo.find_by_id(id).await? {
            Some(subscription) if subscription.user_id == actor.id => {
                self.repo.delete(id).await?;
                Ok(())
            }
            _ => Err(ApplicationError::not_found("subscription not found")),
        }
    }
}
