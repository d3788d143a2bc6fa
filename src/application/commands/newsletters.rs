// src/application/commands/newsletters.rs
use std::sync::Arc;

use super::ensure_capability;
use crate::{
    application::{
        assembler::DtoAssembler,
        dto::{AuthenticatedUser, NewsletterDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::specifications::OwnershipSpec,
        content::{Body, Title},
        newsletter::{NewNewsletter, Newsletter, NewsletterId, NewsletterRepository, NewsletterUpdate},
        publisher::PublisherId,
    },
};

#[derive(Debug)]
pub struct CreateNewsletterCommand {
    pub title: String,
    pub content: String,
    pub publisher_id: Option<i64>,
}

#[derive(Debug, Default)]
pub struct UpdateNewsletterCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub publisher_id: Option<i64>,
}

pub struct NewsletterCommandService {
    repo: Arc<dyn NewsletterRepository>,
    assembler: Arc<DtoAssembler>,
    clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(
        repo: Arc<dyn NewsletterRepository>,
        assembler: Arc<DtoAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            assembler,
            clock,
        }
    }

    pub async fn create_newsletter(
        &self,
        actor: &AuthenticatedUser,
        command: CreateNewsletterCommand,
    ) -> ApplicationResult<NewsletterDto> {
        ensure_capability(actor, "newsletters", "create")?;

        let new_newsletter = NewNewsletter {
            title: Title::new(command.title)?,
            content: Body::new(command.content)?,
            author_id: actor.id,
            publisher_id: command.publisher_id.map(PublisherId::new).transpose()?,
            created_at: self.clock.now(),
        };

        let created = self.repo.insert(new_newsletter).await?;
        self.assembler.newsletter(created).await
    }

    pub async fn update_newsletter(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateNewsletterCommand,
    ) -> ApplicationResult<NewsletterDto> {
        let newsletter = self.load_owned(actor, command.id, "update").await?;

        let mut update = NewsletterUpdate::new(newsletter.id, self.clock.now());
        update.title = command.title.map(Title::new).transpose()?;
        update.content = command.content.map(Body::new).transpose()?;
        update.publisher_id = command.publisher_id.map(PublisherId::new).transpose()?;

        let updated = self.repo.update(update).await?;
        self.assembler.newsletter(updated).await
    }

    pub async fn delete_newsletter(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        let newsletter = self.load_owned(actor, id, "delete").await?;
        self.repo.delete(newsletter.id).await?;
        Ok(())
    }

    async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        verb: &str,
    ) -> ApplicationResult<Newsletter> {
        let newsletter = self
            .repo
            .find_by_id(NewsletterId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("newsletter not found"))?;

        let spec = OwnershipSpec::new(
            &actor.capabilities,
            "newsletters",
            verb,
            newsletter.author_id,
            actor.id,
        );
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "insufficient privileges to {verb} newsletter"
            )));
        }
        Ok(newsletter)
    }
}
