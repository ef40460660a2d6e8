use super::CategoryCommandService;
use crate::{
    application::inputs::CreateProductInput,
    domain::{
        cancellation::ensure_active,
        category::Category,
        errors::{DomainResult, Error},
        validation::Validation,
    },
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

impl CategoryCommandService {
    /// Looks the category up by exact name and inserts it only when the
    /// lookup reports it absent.
    ///
    /// Lookup and insert are two separate repository calls. Two concurrent
    /// callers with the same new name can both miss; the repository rejects
    /// the second insert as a conflict and that failure is returned as-is.
    pub async fn get_or_create_category(
        &self,
        input: &CreateProductInput,
        cancel: &CancellationToken,
    ) -> DomainResult<Category> {
        let name = input.category_name.as_str();
        info!(method = "get_or_create_category", category_name = %name);

        let lookup = ensure_active(cancel, "category lookup")
            .and_then_async(|()| self.repo.get_by_name(name, cancel))
            .await;

        lookup
            .match_async(
                |existing| async move {
                    debug!(category_id = %existing.id, "category already exists");
                    Validation::Success(existing)
                },
                |errors| async move {
                    if !errors.iter().all(Error::is_not_found) {
                        return Validation::Failure(errors);
                    }
                    let created = Category::create(name)
                        .and_then_async(|category| self.persist(category, cancel))
                        .await;
                    if let Validation::Success(category) = &created {
                        info!(category_id = %category.id, category_name = %name, "category created");
                    }
                    created
                },
            )
            .await
    }
}
