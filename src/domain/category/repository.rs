use crate::domain::category::entity::Category;
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::{DomainResult, RepoResult};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Storage port for categories.
///
/// Lookups report an absent row as a failure of kind `NotFound`. `insert`
/// must enforce name uniqueness and report a duplicate as a `Conflict`
/// failure instead of storing a second row.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get(&self, cancel: &CancellationToken) -> DomainResult<Vec<Category>>;
    async fn get_by_id(&self, id: CategoryId, cancel: &CancellationToken) -> DomainResult<Category>;
    async fn get_by_name(&self, name: &str, cancel: &CancellationToken) -> DomainResult<Category>;
    async fn insert(&self, category: &Category, cancel: &CancellationToken) -> RepoResult;
}
