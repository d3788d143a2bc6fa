use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListItemDto, CursorPage},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, Visibility},
        user::UserId,
    },
};

pub struct IndependentArticlesQuery {
    pub journalist_id: i64,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    /// Public articles the journalist wrote without a publisher.
    pub async fn independent_articles(
        &self,
        query: IndependentArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleListItemDto>> {
        let filter = ArticleFilter {
            author_id: Some(UserId::new(query.journalist_id)?),
            independent_only: true,
            visibility: Visibility::Public,
            ..ArticleFilter::default()
        };
        self.page(&filter, query.limit, query.cursor.as_deref()).await
    }
}
