use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListItemDto, AuthenticatedUser, CursorPage},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, Visibility},
        category::CategoryId,
        publisher::PublisherId,
        user::UserId,
    },
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub q: Option<String>,
    pub category_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub author_id: Option<i64>,
    pub include_unapproved: bool,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleListItemDto>> {
        let visibility = if query.include_unapproved {
            self.unapproved_visibility(actor)?
        } else {
            Visibility::Public
        };

        let filter = ArticleFilter {
            query: query
                .q
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            publisher_id: query.publisher_id.map(PublisherId::new).transpose()?,
            author_id: query.author_id.map(UserId::new).transpose()?,
            independent_only: false,
            feed: None,
            visibility,
        };

        self.page(&filter, query.limit, query.cursor.as_deref()).await
    }
}
