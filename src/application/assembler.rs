// src/application/assembler.rs
//! Resolves foreign keys into the nested DTOs returned by reads and writes.
use std::sync::Arc;

use crate::{
    application::{
        dto::{
            ArticleDto, CategoryDto, NewsletterDto, PublisherDetailDto, PublisherDto,
            SubscriptionDto, UserDto,
        },
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        category::{CategoryId, CategoryRepository},
        newsletter::Newsletter,
        publisher::{Publisher, PublisherId, PublisherRepository},
        subscription::{Subscription, SubscriptionTarget},
        user::{UserId, UserRepository},
    },
};

pub struct DtoAssembler {
    users: Arc<dyn UserRepository>,
    publishers: Arc<dyn PublisherRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl DtoAssembler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        publishers: Arc<dyn PublisherRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            users,
            publishers,
            categories,
        }
    }

    pub async fn user(&self, id: UserId) -> ApplicationResult<UserDto> {
        self.users
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("user {id} not found")))
    }

    pub async fn publisher(&self, id: PublisherId) -> ApplicationResult<PublisherDto> {
        self.publishers
            .find_by_id(id)
            .await?
            .map(PublisherDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("publisher {} not found", id.0)))
    }

    pub async fn category(&self, id: CategoryId) -> ApplicationResult<CategoryDto> {
        self.categories
            .find_by_id(id)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("category {} not found", id.0)))
    }

    async fn maybe_publisher(
        &self,
        id: Option<PublisherId>,
    ) -> ApplicationResult<Option<PublisherDto>> {
        match id {
            Some(id) => self.publisher(id).await.map(Some),
            None => Ok(None),
        }
    }

    async fn maybe_category(&self, id: Option<CategoryId>) -> ApplicationResult<Option<CategoryDto>> {
        match id {
            Some(id) => self.category(id).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn article(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let author = self.user(article.author_id).await?;
        let publisher = self.maybe_publisher(article.publisher_id).await?;
        let category = self.maybe_category(article.category_id).await?;
        Ok(ArticleDto::from_parts(article, author, publisher, category))
    }

    pub async fn articles(&self, articles: Vec<Article>) -> ApplicationResult<Vec<ArticleDto>> {
        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            items.push(self.article(article).await?);
        }
        Ok(items)
    }

    pub async fn newsletter(&self, newsletter: Newsletter) -> ApplicationResult<NewsletterDto> {
        let author = self.user(newsletter.author_id).await?;
        let publisher = self.maybe_publisher(newsletter.publisher_id).await?;
        Ok(NewsletterDto::from_parts(newsletter, author, publisher))
    }

    pub async fn subscription(
        &self,
        subscription: Subscription,
    ) -> ApplicationResult<SubscriptionDto> {
        let user = self.user(subscription.user_id).await?;
        let (publisher, journalist) = match subscription.target {
            SubscriptionTarget::Publisher(id) => (Some(self.publisher(id).await?), None),
            SubscriptionTarget::Journalist(id) => (None, Some(self.user(id).await?)),
        };
        Ok(SubscriptionDto {
            id: subscription.id.into(),
            user,
            publisher,
            journalist,
            created_at: subscription.created_at,
        })
    }

    pub async fn publisher_detail(
        &self,
        publisher: Publisher,
    ) -> ApplicationResult<PublisherDetailDto> {
        let mut editors = Vec::with_capacity(publisher.editors.len());
        for id in &publisher.editors {
            editors.push(self.user(*id).await?);
        }
        let mut journalists = Vec::with_capacity(publisher.journalists.len());
        for id in &publisher.journalists {
            journalists.push(self.user(*id).await?);
        }
        Ok(PublisherDetailDto {
            publisher: publisher.into(),
            editors,
            journalists,
        })
    }
}
