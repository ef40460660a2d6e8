use super::CategoryCommandService;
use crate::{
    application::inputs::CreateCategoryInput,
    domain::{category::Category, errors::DomainResult},
};
use tokio_util::sync::CancellationToken;
use tracing::info;

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        input: CreateCategoryInput,
        cancel: &CancellationToken,
    ) -> DomainResult<Category> {
        info!(method = "create_category", ?input);

        input
            .to_category()
            .and_then_async(|category| self.persist(category, cancel))
            .await
    }
}
