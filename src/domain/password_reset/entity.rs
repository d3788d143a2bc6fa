// src/domain/password_reset/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Hours a reset token stays usable after creation.
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

const TOKEN_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResetTokenValue(String);

impl ResetTokenValue {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("reset token cannot be empty".into()));
        }
        if value.len() > TOKEN_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "reset token must be at most {TOKEN_MAX_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ResetTokenValue> for String {
    fn from(value: ResetTokenValue) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    pub id: i64,
    pub user_id: UserId,
    pub token: ResetTokenValue,
    pub created_at: DateTime<Utc>,
    pub is_used: bool,
}

impl PasswordResetToken {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::hours(TOKEN_LIFETIME_HOURS)
    }

    /// Unused and younger than the token lifetime.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        if self.is_used {
            return false;
        }
        now < self.expires_at()
    }

    /// Exactly `!is_valid`, so a used token reports expired even when it is
    /// recent.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.is_valid(now)
    }

    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}

impl fmt::Display for PasswordResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password reset token for user {}", self.user_id)
    }
}

#[derive(Debug, Clone)]
pub struct NewPasswordResetToken {
    pub user_id: UserId,
    pub token: ResetTokenValue,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_at(created_at: DateTime<Utc>) -> PasswordResetToken {
        PasswordResetToken {
            id: 1,
            user_id: UserId::new(1).unwrap(),
            token: ResetTokenValue::new("abc").unwrap(),
            created_at,
            is_used: false,
        }
    }

    #[test]
    fn fresh_token_is_valid() {
        let now = Utc::now();
        let token = token_at(now);
        assert!(token.is_valid(now));
        assert!(!token.is_expired(now));
    }

    #[test]
    fn used_token_is_expired_even_when_recent() {
        let now = Utc::now();
        let mut token = token_at(now);
        token.mark_used();
        assert!(!token.is_valid(now));
        assert!(token.is_expired(now));
    }

    #[test]
    fn validity_ends_at_exactly_twenty_four_hours() {
        let created = Utc::now();
        let token = token_at(created);
        let almost = created + Duration::hours(24) - Duration::milliseconds(1);
        assert!(token.is_valid(almost));
        assert!(token.is_expired(created + Duration::hours(24)));
    }
}
