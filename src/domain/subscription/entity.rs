// src/domain/subscription/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub i64);

impl SubscriptionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "subscription id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SubscriptionId> for i64 {
    fn from(value: SubscriptionId) -> Self {
        value.0
    }
}

/// What a subscription points at. Exactly one target per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionTarget {
    Publisher(PublisherId),
    Journalist(UserId),
}

impl SubscriptionTarget {
    /// Build a target from the two nullable columns / inputs.
    pub fn from_parts(
        publisher: Option<PublisherId>,
        journalist: Option<UserId>,
    ) -> DomainResult<Self> {
        match (publisher, journalist) {
            (Some(publisher), None) => Ok(Self::Publisher(publisher)),
            (None, Some(journalist)) => Ok(Self::Journalist(journalist)),
            (Some(_), Some(_)) => Err(DomainError::Validation(
                "subscription cannot target both a publisher and a journalist".into(),
            )),
            (None, None) => Err(DomainError::Validation(
                "subscription must target a publisher or a journalist".into(),
            )),
        }
    }

    pub fn publisher_id(&self) -> Option<PublisherId> {
        match self {
            Self::Publisher(id) => Some(*id),
            Self::Journalist(_) => None,
        }
    }

    pub fn journalist_id(&self) -> Option<UserId> {
        match self {
            Self::Journalist(id) => Some(*id),
            Self::Publisher(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub target: SubscriptionTarget,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub user_id: UserId,
    pub target: SubscriptionTarget,
    pub created_at: DateTime<Utc>,
}
