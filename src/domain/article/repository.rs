use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleListCursor};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Which workflow states a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Approved or published articles only.
    #[default]
    Public,
    /// Public articles plus everything written by this author.
    PublicAndOwn(UserId),
    All,
}

/// Restricts a listing to content from followed publishers and journalists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedScope {
    pub publishers: Vec<PublisherId>,
    pub journalists: Vec<UserId>,
}

impl FeedScope {
    pub fn is_empty(&self) -> bool {
        self.publishers.is_empty() && self.journalists.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Case-insensitive match against title and content.
    pub query: Option<String>,
    pub category_id: Option<CategoryId>,
    pub publisher_id: Option<PublisherId>,
    pub author_id: Option<UserId>,
    pub independent_only: bool,
    pub feed: Option<FeedScope>,
    pub visibility: Visibility,
}

impl ArticleFilter {
    /// In-memory equivalent of the SQL predicate.
    pub fn matches(&self, article: &Article) -> bool {
        let visible = match self.visibility {
            Visibility::All => true,
            Visibility::Public => article.status.is_public(),
            Visibility::PublicAndOwn(owner) => {
                article.status.is_public() || article.author_id == owner
            }
        };
        if !visible {
            return false;
        }
        if let Some(query) = self.query.as_deref() {
            let needle = query.to_lowercase();
            if !article.title.as_str().to_lowercase().contains(&needle)
                && !article.content.as_str().to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if self.category_id.is_some() && article.category_id != self.category_id {
            return false;
        }
        if self.publisher_id.is_some() && article.publisher_id != self.publisher_id {
            return false;
        }
        if self.author_id.is_some_and(|author| article.author_id != author) {
            return false;
        }
        if self.independent_only && !article.is_independent() {
            return false;
        }
        if let Some(feed) = &self.feed {
            let by_publisher = article
                .publisher_id
                .is_some_and(|publisher| feed.publishers.contains(&publisher));
            if !by_publisher && !feed.journalists.contains(&article.author_id) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)>;
}
