// src/domain/publisher/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const NAME_MAX_LENGTH: usize = 100;
const WEBSITE_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublisherId(pub i64);

impl PublisherId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("publisher id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PublisherId> for i64 {
    fn from(value: PublisherId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherName(String);

impl PublisherName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("publisher name cannot be empty".into()));
        }
        if value.chars().count() > NAME_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "publisher name must be at most {NAME_MAX_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublisherName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PublisherName> for String {
    fn from(value: PublisherName) -> Self {
        value.0
    }
}

/// Publisher home page. Only absolute http(s) URLs are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Website(String);

impl Website {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.len() > WEBSITE_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "website must be at most {WEBSITE_MAX_LENGTH} characters"
            )));
        }
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"))
            .ok_or_else(|| DomainError::Validation("enter a valid URL".into()))?;
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(DomainError::Validation("enter a valid URL".into()));
        }
        Ok(Self(value))
    }

    /// Blank input means "no website".
    pub fn parse_optional(value: &str) -> DomainResult<Option<Self>> {
        if value.trim().is_empty() {
            Ok(None)
        } else {
            Self::new(value).map(Some)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Website> for String {
    fn from(value: Website) -> Self {
        value.0
    }
}
