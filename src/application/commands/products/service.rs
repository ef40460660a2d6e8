use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::{
    application::commands::categories::CategoryCommandService,
    domain::{
        cancellation::ensure_active,
        errors::{DomainResult, RepoResult},
        product::{Product, ProductRepository},
    },
};

pub struct ProductCommandService {
    pub(super) product_repo: Arc<dyn ProductRepository>,
    pub(super) categories: Arc<CategoryCommandService>,
}

impl ProductCommandService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        categories: Arc<CategoryCommandService>,
    ) -> Self {
        Self {
            product_repo,
            categories,
        }
    }

    pub(super) async fn insert(
        &self,
        product: Product,
        cancel: &CancellationToken,
    ) -> DomainResult<Product> {
        ensure_active(cancel, "product insert")
            .and_then_async(|()| async move {
                let outcome = self.product_repo.insert(&product, cancel).await;
                log_rejection("insert", &product, &outcome);
                outcome.into_validation(product)
            })
            .await
    }

    pub(super) async fn update(
        &self,
        product: Product,
        cancel: &CancellationToken,
    ) -> DomainResult<Product> {
        ensure_active(cancel, "product update")
            .and_then_async(|()| async move {
                let outcome = self.product_repo.update(&product, cancel).await;
                log_rejection("update", &product, &outcome);
                outcome.into_validation(product)
            })
            .await
    }
}

fn log_rejection(operation: &str, product: &Product, outcome: &RepoResult) {
    if let RepoResult::Failure(error) = outcome {
        warn!(
            operation,
            product_id = %product.id,
            kind = %error.kind(),
            error = %error,
            "product write rejected"
        );
    }
}
