// src/infrastructure/repositories/postgres_subscription.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::{
    NewSubscription, Subscription, SubscriptionId, SubscriptionRepository, SubscriptionTarget,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRow {
    id: i64,
    user_id: i64,
    publisher_id: Option<i64>,
    journalist_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let target = SubscriptionTarget::from_parts(
            row.publisher_id.map(PublisherId::new).transpose()?,
            row.journalist_id.map(UserId::new).transpose()?,
        )?;
        Ok(Subscription {
            id: SubscriptionId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            target,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<Subscription> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "INSERT INTO subscriptions (user_id, publisher_id, journalist_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, publisher_id, journalist_id, created_at",
        )
        .bind(i64::from(subscription.user_id))
        .bind(subscription.target.publisher_id().map(i64::from))
        .bind(subscription.target.journalist_id().map(i64::from))
        .bind(subscription.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Subscription::try_from(row)
    }

    async fn find_by_id(&self, id: SubscriptionId) -> DomainResult<Option<Subscription>> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT id, user_id, publisher_id, journalist_id, created_at
             FROM subscriptions WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Subscription::try_from).transpose()
    }

    async fn delete(&self, id: SubscriptionId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("subscription not found".into()));
        }
        Ok(())
    }

    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<Subscription>> {
        let rows = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT id, user_id, publisher_id, journalist_id, created_at
             FROM subscriptions WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Subscription::try_from).collect()
    }
}
