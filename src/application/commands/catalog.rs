// src/application/commands/catalog.rs
use std::sync::Arc;

use super::ensure_capability;
use crate::{
    application::{
        assembler::DtoAssembler,
        dto::{AuthenticatedUser, CategoryDto, PublisherDetailDto, PublisherDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        category::{CategoryName, CategoryRepository, NewCategory},
        publisher::{MembershipKind, NewPublisher, PublisherId, PublisherName, PublisherRepository, Website},
        user::UserId,
    },
};

#[derive(Debug)]
pub struct CreatePublisherCommand {
    pub name: String,
    pub description: String,
    pub website: String,
}

#[derive(Debug)]
pub struct AddPublisherMemberCommand {
    pub publisher_id: i64,
    pub user_id: i64,
    pub kind: MembershipKind,
}

#[derive(Debug)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
}

pub struct CatalogCommandService {
    publishers: Arc<dyn PublisherRepository>,
    categories: Arc<dyn CategoryRepository>,
    assembler: Arc<DtoAssembler>,
    clock: Arc<dyn Clock>,
}

impl CatalogCommandService {
    pub fn new(
        publishers: Arc<dyn PublisherRepository>,
        categories: Arc<dyn CategoryRepository>,
        assembler: Arc<DtoAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            publishers,
            categories,
            assembler,
            clock,
        }
    }

    pub async fn create_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        ensure_capability(actor, "publishers", "manage")?;

        let publisher = NewPublisher {
            name: PublisherName::new(command.name)?,
            description: command.description,
            website: Website::parse_optional(&command.website)?,
            created_at: self.clock.now(),
        };
        Ok(self.publishers.insert(publisher).await?.into())
    }

    /// Attach a user to a publisher's editor or journalist list. The user's
    /// role is not consulted.
    pub async fn add_publisher_member(
        &self,
        actor: &AuthenticatedUser,
        command: AddPublisherMemberCommand,
    ) -> ApplicationResult<PublisherDetailDto> {
        ensure_capability(actor, "publishers", "manage")?;

        let publisher = self
            .publishers
            .add_member(
                PublisherId::new(command.publisher_id)?,
                UserId::new(command.user_id)?,
                command.kind,
            )
            .await?;
        self.assembler.publisher_detail(publisher).await
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;

        let category = NewCategory {
            name: CategoryName::new(command.name)?,
            description: command.description,
        };
        Ok(self.categories.insert(category).await?.into())
    }
}
