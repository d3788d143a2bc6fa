use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

const SUMMARY_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// Optional teaser text. Empty is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleSummary(String);

impl ArticleSummary {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > SUMMARY_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "summary must be at most {SUMMARY_MAX_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<ArticleSummary> for String {
    fn from(value: ArticleSummary) -> Self {
        value.0
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Published,
    Rejected,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 5] = [
        ArticleStatus::Draft,
        ArticleStatus::Pending,
        ArticleStatus::Approved,
        ArticleStatus::Published,
        ArticleStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Pending => "pending",
            ArticleStatus::Approved => "approved",
            ArticleStatus::Published => "published",
            ArticleStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Pending => "Pending Approval",
            ArticleStatus::Approved => "Approved",
            ArticleStatus::Published => "Published",
            ArticleStatus::Rejected => "Rejected",
        }
    }

    /// Statuses visible to anonymous readers. `is_approved` plays no part.
    pub fn is_public(&self) -> bool {
        matches!(self, ArticleStatus::Approved | ArticleStatus::Published)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown article status '{s}'")))
    }
}

/// Keyset position in a `created_at DESC, id DESC` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListCursor {
    pub created_at: DateTime<Utc>,
    pub article_id: ArticleId,
}

impl ArticleListCursor {
    pub fn from_parts(created_at: DateTime<Utc>, article_id: ArticleId) -> Self {
        Self {
            created_at,
            article_id,
        }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), self.article_id.0);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (created_at, id) = raw.split_once('|').ok_or_else(invalid)?;
        let created_at = DateTime::parse_from_rfc3339(created_at)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::from_parts(created_at, ArticleId::new(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_approved_and_published_are_public() {
        let public: Vec<_> = ArticleStatus::ALL
            .into_iter()
            .filter(ArticleStatus::is_public)
            .collect();
        assert_eq!(public, vec![ArticleStatus::Approved, ArticleStatus::Published]);
    }

    #[test]
    fn summary_allows_empty_and_caps_length() {
        assert!(ArticleSummary::new("").is_ok());
        assert!(ArticleSummary::new("s".repeat(500)).is_ok());
        assert!(ArticleSummary::new("s".repeat(501)).is_err());
    }

    #[test]
    fn status_parses_every_variant() {
        for status in ArticleStatus::ALL {
            assert_eq!(status.as_str().parse::<ArticleStatus>().unwrap(), status);
        }
        assert!("archived".parse::<ArticleStatus>().is_err());
    }

    #[test]
    fn cursor_decodes_what_it_encodes() {
        let cursor = ArticleListCursor::from_parts(
            DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            ArticleId::new(42).unwrap(),
        );
        assert_eq!(ArticleListCursor::decode(&cursor.encode()).unwrap(), cursor);
        assert!(ArticleListCursor::decode("not-a-cursor").is_err());
    }
}
