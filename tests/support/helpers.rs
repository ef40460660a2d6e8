// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::Response;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use catalog_core::application::commands::{
    categories::CategoryCommandService, products::ProductCommandService,
};
use catalog_core::application::services::ApplicationServices;
use catalog_core::domain::{category::CategoryRepository, product::ProductRepository};
use catalog_core::infrastructure::repositories::{
    InMemoryCategoryRepository, InMemoryProductRepository,
};
use catalog_core::presentation::http::state::HttpState;

use super::mocks::{RecordingCategoryRepo, RecordingProductRepo};

/// Use-case services over recording repositories.
pub struct Fixture {
    pub category_repo: Arc<RecordingCategoryRepo>,
    pub product_repo: Arc<RecordingProductRepo>,
    pub categories: Arc<CategoryCommandService>,
    pub products: ProductCommandService,
}

impl Fixture {
    pub fn new() -> Self {
        let category_repo = Arc::new(RecordingCategoryRepo::new());
        let product_repo = Arc::new(RecordingProductRepo::new());
        let categories = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo) as Arc<dyn CategoryRepository>
        ));
        let products = ProductCommandService::new(
            Arc::clone(&product_repo) as Arc<dyn ProductRepository>,
            Arc::clone(&categories),
        );
        Self {
            category_repo,
            product_repo,
            categories,
            products,
        }
    }
}

pub fn token() -> CancellationToken {
    CancellationToken::new()
}

pub fn build_test_state() -> HttpState {
    let categories = Arc::new(InMemoryCategoryRepository::new());
    let products = Arc::new(InMemoryProductRepository::new(Arc::clone(&categories)));
    let services = Arc::new(ApplicationServices::new(categories, products));
    HttpState {
        services,
        shutdown: CancellationToken::new(),
    }
}

pub fn make_test_router() -> axum::Router {
    catalog_core::presentation::http::routes::build_router(build_test_state())
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
