// src/application/queries/products.rs
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    cancellation::ensure_active,
    errors::DomainResult,
    product::{Product, ProductId, ProductRepository},
};

pub struct ProductQueryService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductQueryService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_products(&self, cancel: &CancellationToken) -> DomainResult<Vec<Product>> {
        info!(method = "get_products");
        ensure_active(cancel, "product listing")
            .and_then_async(|()| self.repo.get(cancel))
            .await
    }

    pub async fn get_product_by_id(
        &self,
        product_id: Uuid,
        cancel: &CancellationToken,
    ) -> DomainResult<Product> {
        info!(method = "get_product_by_id", %product_id);
        ProductId::new(product_id)
            .and_then(|id| ensure_active(cancel, "product lookup").map(|()| id))
            .and_then_async(|id| self.repo.get_by_id(id, cancel))
            .await
    }

    pub async fn get_product_by_name(
        &self,
        product_name: &str,
        cancel: &CancellationToken,
    ) -> DomainResult<Product> {
        info!(method = "get_product_by_name", product_name);
        ensure_active(cancel, "product lookup")
            .and_then_async(|()| self.repo.get_by_name(product_name, cancel))
            .await
    }
}
