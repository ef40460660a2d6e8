// src/application/queries/categories.rs
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    cancellation::ensure_active,
    category::{Category, CategoryId, CategoryRepository},
    errors::DomainResult,
};

/// Read pass-throughs over the category repository.
pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_categories(&self, cancel: &CancellationToken) -> DomainResult<Vec<Category>> {
        info!(method = "get_categories");
        ensure_active(cancel, "category listing")
            .and_then_async(|()| self.repo.get(cancel))
            .await
    }

    pub async fn get_category_by_id(
        &self,
        category_id: Uuid,
        cancel: &CancellationToken,
    ) -> DomainResult<Category> {
        info!(method = "get_category_by_id", %category_id);
        CategoryId::new(category_id)
            .and_then(|id| ensure_active(cancel, "category lookup").map(|()| id))
            .and_then_async(|id| self.repo.get_by_id(id, cancel))
            .await
    }

    pub async fn get_category_by_name(
        &self,
        category_name: &str,
        cancel: &CancellationToken,
    ) -> DomainResult<Category> {
        info!(method = "get_category_by_name", category_name);
        ensure_active(cancel, "category lookup")
            .and_then_async(|()| self.repo.get_by_name(category_name, cancel))
            .await
    }
}
