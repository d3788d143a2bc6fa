use crate::domain::{category::Category, publisher::Publisher};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{serde_time, users::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Empty when the publisher has no website.
    pub website: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Publisher> for PublisherDto {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.into(),
            description: publisher.description,
            website: publisher.website.map(String::from).unwrap_or_default(),
            created_at: publisher.created_at,
        }
    }
}

/// Publisher with its editor and journalist member lists resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublisherDetailDto {
    #[serde(flatten)]
    pub publisher: PublisherDto,
    pub editors: Vec<UserDto>,
    pub journalists: Vec<UserDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            description: category.description,
        }
    }
}
