// src/infrastructure/repositories/postgres_catalog.rs
use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::{
    MembershipKind, NewPublisher, Publisher, PublisherId, PublisherName, PublisherRepository,
    Website,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPublisherRepository {
    pool: PgPool,
}

impl PostgresPublisherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    description: String,
    website: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct MemberRow {
    publisher_id: i64,
    user_id: i64,
    kind: String,
}

impl PublisherRow {
    fn into_publisher(self, members: &[MemberRow]) -> DomainResult<Publisher> {
        let mut publisher = Publisher {
            id: PublisherId::new(self.id)?,
            name: PublisherName::new(self.name)?,
            description: self.description,
            website: self.website.as_deref().map(Website::parse_optional).transpose()?.flatten(),
            created_at: self.created_at,
            editors: Vec::new(),
            journalists: Vec::new(),
        };
        for member in members.iter().filter(|m| m.publisher_id == self.id) {
            let kind = match member.kind.as_str() {
                "editor" => MembershipKind::Editor,
                "journalist" => MembershipKind::Journalist,
                other => {
                    return Err(DomainError::Persistence(format!(
                        "unknown membership kind '{other}'"
                    )));
                }
            };
            publisher.add_member(UserId::new(member.user_id)?, kind);
        }
        Ok(publisher)
    }
}

impl PostgresPublisherRepository {
    async fn members_of(&self, ids: &[i64]) -> DomainResult<Vec<MemberRow>> {
        sqlx::query_as::<_, MemberRow>(
            "SELECT publisher_id, user_id, kind FROM publisher_members
             WHERE publisher_id = ANY($1) ORDER BY user_id",
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl PublisherRepository for PostgresPublisherRepository {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "INSERT INTO publishers (name, description, website, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, description, website, created_at",
        )
        .bind(publisher.name.as_str())
        .bind(&publisher.description)
        .bind(publisher.website.map(String::from))
        .bind(publisher.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.into_publisher(&[])
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, description, website, created_at FROM publishers WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let members = self.members_of(&[row.id]).await?;
        row.into_publisher(&members).map(Some)
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        let rows = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, description, website, created_at FROM publishers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let members = self.members_of(&ids).await?;
        rows.into_iter()
            .map(|row| row.into_publisher(&members))
            .collect()
    }

    async fn add_member(
        &self,
        id: PublisherId,
        user_id: UserId,
        kind: MembershipKind,
    ) -> DomainResult<Publisher> {
        sqlx::query(
            "INSERT INTO publisher_members (publisher_id, user_id, kind)
             VALUES ($1, $2, $3) ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(id))
        .bind(i64::from(user_id))
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("publisher not found".into()))
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            description: row.description,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, description) VALUES ($1, $2)
             RETURNING id, name, description",
        )
        .bind(category.name.as_str())
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
