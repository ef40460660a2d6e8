// tests/support/mocks/category_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use catalog_core::domain::category::{Category, CategoryId, CategoryRepository};
use catalog_core::domain::errors::{DomainResult, Error, RepoResult};
use catalog_core::domain::validation::Validation;
use catalog_core::infrastructure::repositories::InMemoryCategoryRepository;

/// In-memory category store that counts calls and can be told to fail.
#[derive(Default)]
pub struct RecordingCategoryRepo {
    inner: InMemoryCategoryRepository,
    lookups: AtomicUsize,
    insert_attempts: AtomicUsize,
    lookup_failure: Mutex<Option<Error>>,
    insert_failure: Mutex<Option<Error>>,
    /// Makes name lookups miss even when the row exists, like a concurrent
    /// request that looked up just before another one inserted.
    stale_lookups: AtomicBool,
    cancel_after_lookup: Mutex<Option<CancellationToken>>,
}

impl RecordingCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub fn fail_lookups_with(&self, error: Error) {
        *self.lookup_failure.lock().unwrap() = Some(error);
    }

    pub fn fail_inserts_with(&self, error: Error) {
        *self.insert_failure.lock().unwrap() = Some(error);
    }

    pub fn serve_stale_lookups(&self) {
        self.stale_lookups.store(true, Ordering::SeqCst);
    }

    pub fn cancel_after_lookup(&self, token: CancellationToken) {
        *self.cancel_after_lookup.lock().unwrap() = Some(token);
    }

    pub async fn seed(&self, name: &str) -> Category {
        let category = Category::create(name).ok().expect("valid seed name");
        let outcome = self.inner.insert(&category, &CancellationToken::new()).await;
        assert_eq!(outcome, RepoResult::Success);
        category
    }

    pub async fn stored(&self) -> Vec<Category> {
        self.inner
            .get(&CancellationToken::new())
            .await
            .ok()
            .expect("listing never fails")
    }
}

#[async_trait]
impl CategoryRepository for RecordingCategoryRepo {
    async fn get(&self, cancel: &CancellationToken) -> DomainResult<Vec<Category>> {
        self.inner.get(cancel).await
    }

    async fn get_by_id(&self, id: CategoryId, cancel: &CancellationToken) -> DomainResult<Category> {
        self.inner.get_by_id(id, cancel).await
    }

    async fn get_by_name(&self, name: &str, cancel: &CancellationToken) -> DomainResult<Category> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let injected = self.lookup_failure.lock().unwrap().clone();
        let found = if let Some(error) = injected {
            Validation::fail(error)
        } else if self.stale_lookups.load(Ordering::SeqCst) {
            Validation::fail(Error::not_found(format!("category '{name}' not found")))
        } else {
            self.inner.get_by_name(name, cancel).await
        };
        let pending = self.cancel_after_lookup.lock().unwrap().take();
        if let Some(token) = pending {
            token.cancel();
        }
        found
    }

    async fn insert(&self, category: &Category, cancel: &CancellationToken) -> RepoResult {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        let injected = self.insert_failure.lock().unwrap().clone();
        if let Some(error) = injected {
            return RepoResult::Failure(error);
        }
        self.inner.insert(category, cancel).await
    }
}
