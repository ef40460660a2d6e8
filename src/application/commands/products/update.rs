use super::ProductCommandService;
use crate::{
    application::inputs::{CreateProductInput, UpdateProductInput},
    domain::{errors::DomainResult, product::Product},
};
use tokio_util::sync::CancellationToken;
use tracing::info;

impl ProductCommandService {
    /// Same chain as creation, except the resolved category is set on the
    /// input before conversion so the built product already carries it.
    /// Fields that do not depend on the category are checked first.
    pub async fn update_product(
        &self,
        mut input: UpdateProductInput,
        cancel: &CancellationToken,
    ) -> DomainResult<Product> {
        info!(method = "update_product", ?input);

        let lookup = CreateProductInput::from(&input);
        let category = input
            .validate_fields()
            .and_then_async(|()| self.categories.get_or_create_category(&lookup, cancel))
            .await;

        category
            .and_then(|category| {
                input.set_category(category);
                input.to_product()
            })
            .and_then_async(|product| self.update(product, cancel))
            .await
    }
}
