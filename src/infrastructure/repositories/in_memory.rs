// src/infrastructure/repositories/in_memory.rs
//! Process-local repositories with the same contract as the SQLite ones:
//! unique category names, products must point at a stored category.

use crate::domain::category::{Category, CategoryId, CategoryRepository};
use crate::domain::errors::{DomainResult, Error, RepoResult};
use crate::domain::product::{Product, ProductId, ProductRepository};
use crate::domain::validation::Validation;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn cancelled<T>(cancel: &CancellationToken, operation: &str) -> Option<DomainResult<T>> {
    cancel
        .is_cancelled()
        .then(|| Validation::fail(Error::cancelled(format!("{operation} was cancelled"))))
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains_id(&self, id: CategoryId) -> bool {
        lock(&self.categories).iter().any(|c| c.id == id)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get(&self, cancel: &CancellationToken) -> DomainResult<Vec<Category>> {
        if let Some(failure) = cancelled(cancel, "category listing") {
            return failure;
        }
        let mut all = lock(&self.categories).clone();
        all.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Validation::Success(all)
    }

    async fn get_by_id(&self, id: CategoryId, cancel: &CancellationToken) -> DomainResult<Category> {
        if let Some(failure) = cancelled(cancel, "category lookup") {
            return failure;
        }
        lock(&self.categories)
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .map_or_else(
                || Validation::fail(Error::not_found(format!("category {id} not found"))),
                Validation::Success,
            )
    }

    async fn get_by_name(&self, name: &str, cancel: &CancellationToken) -> DomainResult<Category> {
        if let Some(failure) = cancelled(cancel, "category lookup") {
            return failure;
        }
        lock(&self.categories)
            .iter()
            .find(|c| c.name.as_str() == name)
            .cloned()
            .map_or_else(
                || Validation::fail(Error::not_found(format!("category '{name}' not found"))),
                Validation::Success,
            )
    }

    async fn insert(&self, category: &Category, cancel: &CancellationToken) -> RepoResult {
        if cancel.is_cancelled() {
            return RepoResult::Failure(Error::cancelled("category insert was cancelled"));
        }
        // Check and push under one guard so concurrent inserts of the same
        // name cannot both succeed.
        let mut guard = lock(&self.categories);
        if guard.iter().any(|c| c.name == category.name) {
            return RepoResult::Failure(Error::conflict("category name already exists"));
        }
        if guard.iter().any(|c| c.id == category.id) {
            return RepoResult::Failure(Error::conflict("category id already exists"));
        }
        guard.push(category.clone());
        RepoResult::Success
    }
}

pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
    categories: Arc<InMemoryCategoryRepository>,
}

impl InMemoryProductRepository {
    pub fn new(categories: Arc<InMemoryCategoryRepository>) -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            categories,
        }
    }

    fn check_category(&self, product: &Product) -> Result<(), RepoResult> {
        let category = product.category().ok_or_else(|| {
            RepoResult::Failure(Error::validation(
                "product must reference a category before it is stored",
            ))
        })?;
        if self.categories.contains_id(category.id) {
            Ok(())
        } else {
            Err(RepoResult::Failure(Error::not_found(
                "referenced category not found",
            )))
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get(&self, cancel: &CancellationToken) -> DomainResult<Vec<Product>> {
        if let Some(failure) = cancelled(cancel, "product listing") {
            return failure;
        }
        Validation::Success(lock(&self.products).clone())
    }

    async fn get_by_id(&self, id: ProductId, cancel: &CancellationToken) -> DomainResult<Product> {
        if let Some(failure) = cancelled(cancel, "product lookup") {
            return failure;
        }
        lock(&self.products)
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map_or_else(
                || Validation::fail(Error::not_found(format!("product {id} not found"))),
                Validation::Success,
            )
    }

    async fn get_by_name(&self, name: &str, cancel: &CancellationToken) -> DomainResult<Product> {
        if let Some(failure) = cancelled(cancel, "product lookup") {
            return failure;
        }
        lock(&self.products)
            .iter()
            .find(|p| p.name.as_str() == name)
            .cloned()
            .map_or_else(
                || Validation::fail(Error::not_found(format!("product '{name}' not found"))),
                Validation::Success,
            )
    }

    async fn insert(&self, product: &Product, cancel: &CancellationToken) -> RepoResult {
        if cancel.is_cancelled() {
            return RepoResult::Failure(Error::cancelled("product insert was cancelled"));
        }
        if let Err(rejected) = self.check_category(product) {
            return rejected;
        }
        let mut guard = lock(&self.products);
        if guard.iter().any(|p| p.id == product.id) {
            return RepoResult::Failure(Error::conflict("product id already exists"));
        }
        guard.push(product.clone());
        RepoResult::Success
    }

    async fn update(&self, product: &Product, cancel: &CancellationToken) -> RepoResult {
        if cancel.is_cancelled() {
            return RepoResult::Failure(Error::cancelled("product update was cancelled"));
        }
        if let Err(rejected) = self.check_category(product) {
            return rejected;
        }
        let mut guard = lock(&self.products);
        match guard.iter_mut().find(|p| p.id == product.id) {
            Some(stored) => {
                *stored = product.clone();
                RepoResult::Success
            }
            None => RepoResult::Failure(Error::not_found(format!(
                "product {} not found",
                product.id
            ))),
        }
    }
}
