use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{NewNewsletter, Newsletter, NewsletterId, NewsletterUpdate};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct NewsletterFilter {
    pub author_id: Option<UserId>,
    pub publisher_id: Option<PublisherId>,
    pub independent_only: bool,
}

impl NewsletterFilter {
    pub fn matches(&self, newsletter: &Newsletter) -> bool {
        self.author_id.is_none_or(|author| newsletter.author_id == author)
            && (self.publisher_id.is_none() || newsletter.publisher_id == self.publisher_id)
            && (!self.independent_only || newsletter.is_independent())
    }
}

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter>;
    async fn update(&self, update: NewsletterUpdate) -> DomainResult<Newsletter>;
    async fn delete(&self, id: NewsletterId) -> DomainResult<()>;
    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<Newsletter>>;
    /// Newest first.
    async fn list(&self, filter: &NewsletterFilter) -> DomainResult<Vec<Newsletter>>;
}
