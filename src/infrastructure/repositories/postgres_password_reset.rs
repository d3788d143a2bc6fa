// src/infrastructure/repositories/postgres_password_reset.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::password_reset::{
    NewPasswordResetToken, PasswordResetToken, PasswordResetTokenRepository, ResetTokenValue,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPasswordResetTokenRepository {
    pool: PgPool,
}

impl PostgresPasswordResetTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TokenRow {
    id: i64,
    user_id: i64,
    token: String,
    created_at: DateTime<Utc>,
    is_used: bool,
}

impl TryFrom<TokenRow> for PasswordResetToken {
    type Error = DomainError;

    fn try_from(row: TokenRow) -> Result<Self, Self::Error> {
        Ok(PasswordResetToken {
            id: row.id,
            user_id: UserId::new(row.user_id)?,
            token: ResetTokenValue::new(row.token)?,
            created_at: row.created_at,
            is_used: row.is_used,
        })
    }
}

#[async_trait]
impl PasswordResetTokenRepository for PostgresPasswordResetTokenRepository {
    async fn insert(&self, token: NewPasswordResetToken) -> DomainResult<PasswordResetToken> {
        let row = sqlx::query_as::<_, TokenRow>(
            "INSERT INTO password_reset_tokens (user_id, token, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, token, created_at, is_used",
        )
        .bind(i64::from(token.user_id))
        .bind(token.token.as_str())
        .bind(token.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PasswordResetToken::try_from(row)
    }

    async fn find_by_token(
        &self,
        token: &ResetTokenValue,
    ) -> DomainResult<Option<PasswordResetToken>> {
        let row = sqlx::query_as::<_, TokenRow>(
            "SELECT id, user_id, token, created_at, is_used
             FROM password_reset_tokens WHERE token = $1",
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PasswordResetToken::try_from).transpose()
    }

    async fn mark_used(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("UPDATE password_reset_tokens SET is_used = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("reset token not found".into()));
        }
        Ok(())
    }
}
