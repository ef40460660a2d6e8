use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::domain::{
    cancellation::ensure_active,
    category::{Category, CategoryRepository},
    errors::{DomainResult, RepoResult},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Single insert shared by explicit creation and get-or-create.
    pub(super) async fn persist(
        &self,
        category: Category,
        cancel: &CancellationToken,
    ) -> DomainResult<Category> {
        ensure_active(cancel, "category insert")
            .and_then_async(|()| async move {
                let outcome = self.repo.insert(&category, cancel).await;
                if let RepoResult::Failure(error) = &outcome {
                    warn!(
                        category_name = %category.name,
                        kind = %error.kind(),
                        error = %error,
                        "category insert rejected"
                    );
                }
                outcome.into_validation(category)
            })
            .await
    }
}
