// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleListCursor, ArticleReadRepository, ArticleStatus,
    ArticleSummary, ArticleUpdate, ArticleWriteRepository, NewArticle, Visibility,
};
use crate::domain::category::CategoryId;
use crate::domain::content::{Body, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, content, summary, author_id, publisher_id, category_id, \
     status, is_approved, approved_by, approved_at, created_at, updated_at, published_at";

const PUBLIC_STATUSES: [&str; 2] = ["approved", "published"];

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    summary: String,
    author_id: i64,
    publisher_id: Option<i64>,
    category_id: Option<i64>,
    status: String,
    is_approved: bool,
    approved_by: Option<i64>,
    approved_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: Title::new(row.title)?,
            content: Body::new(row.content)?,
            summary: ArticleSummary::new(row.summary)?,
            author_id: UserId::new(row.author_id)?,
            publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            status: row.status.parse::<ArticleStatus>()?,
            is_approved: row.is_approved,
            approved_by: row.approved_by.map(UserId::new).transpose()?,
            approved_at: row.approved_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            published_at: row.published_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            summary,
            author_id,
            publisher_id,
            category_id,
            status,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, content, summary, author_id, publisher_id, category_id, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(summary.as_str())
            .bind(i64::from(author_id))
            .bind(publisher_id.map(i64::from))
            .bind(category_id.map(i64::from))
            .bind(status.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            summary,
            publisher_id,
            category_id,
            status,
            workflow,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(summary) = summary {
            builder.push(", summary = ");
            builder.push_bind(summary.into_inner());
        }
        if let Some(publisher_id) = publisher_id {
            builder.push(", publisher_id = ");
            builder.push_bind(i64::from(publisher_id));
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(state) = workflow {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", is_approved = ");
            builder.push_bind(state.is_approved);
            builder.push(", approved_by = ");
            builder.push_bind(state.approved_by.map(i64::from));
            builder.push(", approved_at = ");
            builder.push_bind(state.approved_at);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

/// Escape LIKE wildcards so the query matches literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl PostgresArticleReadRepository {
    fn apply_conditions(
        builder: &mut QueryBuilder<'_, Postgres>,
        filter: &ArticleFilter,
        cursor: Option<&ArticleListCursor>,
    ) {
        let public: Vec<String> = PUBLIC_STATUSES.iter().map(|s| s.to_string()).collect();
        builder.push(" WHERE TRUE");

        match filter.visibility {
            Visibility::All => {}
            Visibility::Public => {
                builder.push(" AND status = ANY(");
                builder.push_bind(public);
                builder.push(")");
            }
            Visibility::PublicAndOwn(owner) => {
                builder.push(" AND (status = ANY(");
                builder.push_bind(public);
                builder.push(") OR author_id = ");
                builder.push_bind(i64::from(owner));
                builder.push(")");
            }
        }

        if let Some(query) = filter.query.as_deref() {
            let pattern = like_pattern(query);
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(publisher_id) = filter.publisher_id {
            builder.push(" AND publisher_id = ");
            builder.push_bind(i64::from(publisher_id));
        }
        if let Some(author_id) = filter.author_id {
            builder.push(" AND author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        if filter.independent_only {
            builder.push(" AND publisher_id IS NULL");
        }
        if let Some(feed) = &filter.feed {
            let publishers: Vec<i64> = feed.publishers.iter().copied().map(i64::from).collect();
            let journalists: Vec<i64> = feed.journalists.iter().copied().map(i64::from).collect();
            builder.push(" AND (publisher_id = ANY(");
            builder.push_bind(publishers);
            builder.push(") OR author_id = ANY(");
            builder.push_bind(journalists);
            builder.push("))");
        }

        if let Some(cursor) = cursor {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.article_id));
            builder.push(")");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = (limit as i64) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles");
        Self::apply_conditions(&mut builder, filter, cursor.as_ref());
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if articles.len() > limit as usize {
            articles.pop();
            if let Some(last) = articles.last() {
                next_cursor = Some(ArticleListCursor::from_parts(last.created_at, last.id));
            }
        }

        Ok((articles, next_cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn public_filter_binds_visible_statuses() {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT id FROM articles");
        let filter = ArticleFilter {
            independent_only: true,
            ..ArticleFilter::default()
        };
        PostgresArticleReadRepository::apply_conditions(&mut builder, &filter, None);
        assert_eq!(
            builder.sql(),
            "SELECT id FROM articles WHERE TRUE AND status = ANY($1) AND publisher_id IS NULL"
        );
    }
}
