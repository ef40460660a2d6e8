use super::ProductCommandService;
use crate::{
    application::inputs::CreateProductInput,
    domain::{errors::DomainResult, product::Product},
};
use tokio_util::sync::CancellationToken;
use tracing::info;

impl ProductCommandService {
    /// Builds the product, resolves its category, attaches it and inserts.
    ///
    /// Building the product touches no repository, so invalid fields fail
    /// before any write. A category failure ends the chain before the
    /// product insert. At most one category insert and one product insert
    /// happen per call.
    pub async fn create_product(
        &self,
        input: CreateProductInput,
        cancel: &CancellationToken,
    ) -> DomainResult<Product> {
        info!(method = "create_product", ?input);

        input
            .to_product()
            .and_then_async(|product| async move {
                self.categories
                    .get_or_create_category(&input, cancel)
                    .await
                    .map(|category| product.with_category(category))
            })
            .await
            .and_then_async(|product| self.insert(product, cancel))
            .await
    }
}
