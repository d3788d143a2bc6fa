// src/application/queries/catalog.rs
use std::sync::Arc;

use crate::{
    application::{
        assembler::DtoAssembler,
        dto::{CategoryDto, PublisherDetailDto, PublisherDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryRepository,
        publisher::{PublisherId, PublisherRepository},
    },
};

pub struct CatalogQueryService {
    publishers: Arc<dyn PublisherRepository>,
    categories: Arc<dyn CategoryRepository>,
    assembler: Arc<DtoAssembler>,
}

impl CatalogQueryService {
    pub fn new(
        publishers: Arc<dyn PublisherRepository>,
        categories: Arc<dyn CategoryRepository>,
        assembler: Arc<DtoAssembler>,
    ) -> Self {
        Self {
            publishers,
            categories,
            assembler,
        }
    }

    pub async fn list_publishers(&self) -> ApplicationResult<Vec<PublisherDto>> {
        let publishers = self.publishers.list().await?;
        Ok(publishers.into_iter().map(PublisherDto::from).collect())
    }

    pub async fn get_publisher(&self, id: i64) -> ApplicationResult<PublisherDetailDto> {
        let publisher = self
            .publishers
            .find_by_id(PublisherId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
        self.assembler.publisher_detail(publisher).await
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
