use crate::domain::category::entity::{Category, CategoryId, NewCategory};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    /// All categories ordered by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
