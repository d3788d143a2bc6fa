// src/application/dto/articles.rs
use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    catalog::{CategoryDto, PublisherDto},
    serde_time,
    users::UserDto,
};

/// Full article representation with author, publisher and category nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub author: UserDto,
    pub author_id: i64,
    pub publisher: Option<PublisherDto>,
    pub publisher_id: Option<i64>,
    pub category: Option<CategoryDto>,
    pub category_id: Option<i64>,
    pub status: ArticleStatus,
    pub is_approved: bool,
    pub approved_by: Option<i64>,
    #[serde(with = "serde_time::option")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleDto {
    pub fn from_parts(
        article: Article,
        author: UserDto,
        publisher: Option<PublisherDto>,
        category: Option<CategoryDto>,
    ) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            summary: article.summary.into_inner(),
            author,
            author_id: article.author_id.into(),
            publisher,
            publisher_id: article.publisher_id.map(i64::from),
            category,
            category_id: article.category_id.map(i64::from),
            status: article.status,
            is_approved: article.is_approved,
            approved_by: article.approved_by.map(i64::from),
            approved_at: article.approved_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
        }
    }
}

/// Compact listing row carrying display names instead of nested objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleListItemDto {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub author_name: String,
    pub publisher_name: Option<String>,
    pub category_name: Option<String>,
    pub status: ArticleStatus,
    pub is_approved: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<ArticleDto> for ArticleListItemDto {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            summary: dto.summary,
            author_name: dto.author.username,
            publisher_name: dto.publisher.map(|p| p.name),
            category_name: dto.category.map(|c| c.name),
            status: dto.status,
            is_approved: dto.is_approved,
            created_at: dto.created_at,
            published_at: dto.published_at,
        }
    }
}
