// src/application/queries/newsletters.rs
use std::sync::Arc;

use crate::{
    application::{
        assembler::DtoAssembler,
        dto::NewsletterDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        newsletter::{NewsletterFilter, NewsletterId, NewsletterRepository},
        publisher::PublisherId,
        user::UserId,
    },
};

#[derive(Debug, Default)]
pub struct ListNewslettersQuery {
    pub author_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub independent_only: bool,
}

pub struct NewsletterQueryService {
    repo: Arc<dyn NewsletterRepository>,
    assembler: Arc<DtoAssembler>,
}

impl NewsletterQueryService {
    pub fn new(repo: Arc<dyn NewsletterRepository>, assembler: Arc<DtoAssembler>) -> Self {
        Self { repo, assembler }
    }

    pub async fn get_newsletter(&self, id: i64) -> ApplicationResult<NewsletterDto> {
        let newsletter = self
            .repo
            .find_by_id(NewsletterId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("newsletter not found"))?;
        self.assembler.newsletter(newsletter).await
    }

    pub async fn list_newsletters(
        &self,
        query: ListNewslettersQuery,
    ) -> ApplicationResult<Vec<NewsletterDto>> {
        let filter = NewsletterFilter {
            author_id: query.author_id.map(UserId::new).transpose()?,
            publisher_id: query.publisher_id.map(PublisherId::new).transpose()?,
            independent_only: query.independent_only,
        };
        let mut items = Vec::new();
        for newsletter in self.repo.list(&filter).await? {
            items.push(self.assembler.newsletter(newsletter).await?);
        }
        Ok(items)
    }

    /// Newsletters the journalist wrote without a publisher.
    pub async fn independent_newsletters(
        &self,
        journalist_id: i64,
    ) -> ApplicationResult<Vec<NewsletterDto>> {
        self.list_newsletters(ListNewslettersQuery {
            author_id: Some(journalist_id),
            publisher_id: None,
            independent_only: true,
        })
        .await
    }
}
