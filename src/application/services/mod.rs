use std::sync::Arc;

use crate::{
    application::{
        commands::{categories::CategoryCommandService, products::ProductCommandService},
        queries::{CategoryQueryService, ProductQueryService},
    },
    domain::{category::CategoryRepository, product::ProductRepository},
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        let category_commands = Arc::new(CategoryCommandService::new(Arc::clone(&category_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_repo),
            Arc::clone(&category_commands),
        ));
        let product_queries = Arc::new(ProductQueryService::new(Arc::clone(&product_repo)));

        Self {
            category_commands,
            category_queries,
            product_commands,
            product_queries,
        }
    }
}
