use crate::domain::newsletter::Newsletter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{catalog::PublisherDto, serde_time, users::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewsletterDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: UserDto,
    pub author_id: i64,
    pub publisher: Option<PublisherDto>,
    pub publisher_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl NewsletterDto {
    pub fn from_parts(
        newsletter: Newsletter,
        author: UserDto,
        publisher: Option<PublisherDto>,
    ) -> Self {
        Self {
            id: newsletter.id.into(),
            title: newsletter.title.into_inner(),
            content: newsletter.content.into_inner(),
            author,
            author_id: newsletter.author_id.into(),
            publisher,
            publisher_id: newsletter.publisher_id.map(i64::from),
            created_at: newsletter.created_at,
            updated_at: newsletter.updated_at,
        }
    }
}
