use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListItemDto, AuthenticatedUser, CursorPage},
        error::ApplicationResult,
    },
    domain::article::{ArticleFilter, FeedScope, Visibility},
};

#[derive(Debug, Default)]
pub struct SubscriberFeedQuery {
    pub limit: u32,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    /// Public articles from every publisher and journalist the caller
    /// subscribes to.
    pub async fn subscriber_feed(
        &self,
        actor: &AuthenticatedUser,
        query: SubscriberFeedQuery,
    ) -> ApplicationResult<CursorPage<ArticleListItemDto>> {
        let mut scope = FeedScope::default();
        for subscription in self.subscriptions.list_for_user(actor.id).await? {
            if let Some(publisher) = subscription.target.publisher_id() {
                scope.publishers.push(publisher);
            }
            if let Some(journalist) = subscription.target.journalist_id() {
                scope.journalists.push(journalist);
            }
        }
        if scope.is_empty() {
            return Ok(CursorPage::new(Vec::new(), None));
        }

        let filter = ArticleFilter {
            feed: Some(scope),
            visibility: Visibility::Public,
            ..ArticleFilter::default()
        };
        self.page(&filter, query.limit, query.cursor.as_deref()).await
    }
}
