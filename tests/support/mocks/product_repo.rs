// tests/support/mocks/product_repo.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use catalog_core::domain::category::CategoryRepository;
use catalog_core::domain::errors::{DomainResult, Error, RepoResult};
use catalog_core::domain::product::{Product, ProductId, ProductRepository};
use catalog_core::infrastructure::repositories::{
    InMemoryCategoryRepository, InMemoryProductRepository,
};

/// Product store that counts writes and can reject them.
///
/// It keeps its own category view so it accepts any product carrying a
/// category, whichever category repository the test uses.
pub struct RecordingProductRepo {
    inner: InMemoryProductRepository,
    categories: Arc<InMemoryCategoryRepository>,
    insert_attempts: AtomicUsize,
    update_attempts: AtomicUsize,
    insert_failure: Mutex<Option<Error>>,
    update_failure: Mutex<Option<Error>>,
}

impl RecordingProductRepo {
    pub fn new() -> Self {
        let categories = Arc::new(InMemoryCategoryRepository::new());
        Self {
            inner: InMemoryProductRepository::new(Arc::clone(&categories)),
            categories,
            insert_attempts: AtomicUsize::new(0),
            update_attempts: AtomicUsize::new(0),
            insert_failure: Mutex::new(None),
            update_failure: Mutex::new(None),
        }
    }

    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub fn update_attempts(&self) -> usize {
        self.update_attempts.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.insert_attempts() + self.update_attempts()
    }

    pub fn fail_inserts_with(&self, error: Error) {
        *self.insert_failure.lock().unwrap() = Some(error);
    }

    pub fn fail_updates_with(&self, error: Error) {
        *self.update_failure.lock().unwrap() = Some(error);
    }

    async fn mirror_category(&self, product: &Product) {
        if let Some(category) = product.category() {
            // A conflict only means the category is already mirrored.
            let _ = self
                .categories
                .insert(category, &CancellationToken::new())
                .await;
        }
    }
}

#[async_trait]
impl ProductRepository for RecordingProductRepo {
    async fn get(&self, cancel: &CancellationToken) -> DomainResult<Vec<Product>> {
        self.inner.get(cancel).await
    }

    async fn get_by_id(&self, id: ProductId, cancel: &CancellationToken) -> DomainResult<Product> {
        self.inner.get_by_id(id, cancel).await
    }

    async fn get_by_name(&self, name: &str, cancel: &CancellationToken) -> DomainResult<Product> {
        self.inner.get_by_name(name, cancel).await
    }

    async fn insert(&self, product: &Product, cancel: &CancellationToken) -> RepoResult {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        let injected = self.insert_failure.lock().unwrap().clone();
        if let Some(error) = injected {
            return RepoResult::Failure(error);
        }
        self.mirror_category(product).await;
        self.inner.insert(product, cancel).await
    }

    async fn update(&self, product: &Product, cancel: &CancellationToken) -> RepoResult {
        self.update_attempts.fetch_add(1, Ordering::SeqCst);
        let injected = self.update_failure.lock().unwrap().clone();
        if let Some(error) = injected {
            return RepoResult::Failure(error);
        }
        self.mirror_category(product).await;
        self.inner.update(product, cancel).await
    }
}
