use crate::domain::errors::{DomainResult, RepoResult};
use crate::domain::product::entity::Product;
use crate::domain::product::value_objects::ProductId;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Storage port for products. Loaded products come back with their category
/// attached; writes are keyed by `Product::id`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get(&self, cancel: &CancellationToken) -> DomainResult<Vec<Product>>;
    async fn get_by_id(&self, id: ProductId, cancel: &CancellationToken) -> DomainResult<Product>;
    async fn get_by_name(&self, name: &str, cancel: &CancellationToken) -> DomainResult<Product>;
    async fn insert(&self, product: &Product, cancel: &CancellationToken) -> RepoResult;
    async fn update(&self, product: &Product, cancel: &CancellationToken) -> RepoResult;
}
