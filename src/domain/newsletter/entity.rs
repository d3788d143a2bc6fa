// src/domain/newsletter/entity.rs
use crate::domain::content::{Body, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsletterId(pub i64);

impl NewsletterId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "newsletter id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NewsletterId> for i64 {
    fn from(value: NewsletterId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Newsletter {
    pub id: NewsletterId,
    pub title: Title,
    pub content: Body,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Newsletter {
    pub fn is_independent(&self) -> bool {
        self.publisher_id.is_none()
    }
}

impl fmt::Display for Newsletter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewNewsletter {
    pub title: Title,
    pub content: Body,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewsletterUpdate {
    pub id: NewsletterId,
    pub title: Option<Title>,
    pub content: Option<Body>,
    pub publisher_id: Option<PublisherId>,
    pub updated_at: DateTime<Utc>,
}

impl NewsletterUpdate {
    pub fn new(id: NewsletterId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            publisher_id: None,
            updated_at,
        }
    }

    pub fn apply_to(self, newsletter: &mut Newsletter) {
        if let Some(title) = self.title {
            newsletter.title = title;
        }
        if let Some(content) = self.content {
            newsletter.content = content;
        }
        if let Some(publisher_id) = self.publisher_id {
            newsletter.publisher_id = Some(publisher_id);
        }
        newsletter.updated_at = self.updated_at;
    }
}
