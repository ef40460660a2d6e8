// src/infrastructure/repositories/sqlite_product.rs
use super::{map_sqlx, parse_stored_id, write_outcome};
use crate::domain::cancellation::ensure_active;
use crate::domain::category::{Category, CategoryId, CategoryName};
use crate::domain::errors::{DomainResult, Error, RepoResult};
use crate::domain::product::{Price, Product, ProductId, ProductName, ProductRepository};
use crate::domain::validation::Validation;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use tokio_util::sync::CancellationToken;

const SELECT_PRODUCTS: &str = "SELECT p.id, p.name, p.price, c.id AS category_id, c.name AS category_name \
     FROM products p JOIN categories c ON c.id = p.category_id";

#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price: i64,
    category_id: String,
    category_name: String,
}

impl ProductRow {
    fn into_product(self) -> DomainResult<Product> {
        let category = parse_stored_id(&self.category_id)
            .and_then(CategoryId::new)
            .zip_with(CategoryName::new(self.category_name), Category::restore);

        parse_stored_id(&self.id)
            .and_then(ProductId::new)
            .zip(ProductName::new(self.name))
            .zip(Price::new(self.price))
            .zip(category)
            .map(|(((id, name), price), category)| {
                Product::new(id, name, price).with_category(category)
            })
    }
}

fn found_or_missing(
    row: Result<Option<ProductRow>, sqlx::Error>,
    missing: impl FnOnce() -> String,
) -> DomainResult<Product> {
    match row {
        Ok(Some(row)) => row.into_product(),
        Ok(None) => Validation::fail(Error::not_found(missing())),
        Err(err) => Validation::fail(map_sqlx(err)),
    }
}

fn require_category(product: &Product) -> Result<&Category, RepoResult> {
    product.category().ok_or_else(|| {
        RepoResult::Failure(Error::validation(
            "product must reference a category before it is stored",
        ))
    })
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn get(&self, cancel: &CancellationToken) -> DomainResult<Vec<Product>> {
        ensure_active(cancel, "product listing")
            .and_then_async(|()| async move {
                let sql = format!("{SELECT_PRODUCTS} ORDER BY p.rowid");
                match sqlx::query_as::<_, ProductRow>(&sql)
                    .fetch_all(&self.pool)
                    .await
                {
                    Ok(rows) => rows.into_iter().map(ProductRow::into_product).collect(),
                    Err(err) => Validation::fail(map_sqlx(err)),
                }
            })
            .await
    }

    async fn get_by_id(&self, id: ProductId, cancel: &CancellationToken) -> DomainResult<Product> {
        ensure_active(cancel, "product lookup")
            .and_then_async(|()| async move {
                let sql = format!("{SELECT_PRODUCTS} WHERE p.id = ?");
                let row = sqlx::query_as::<_, ProductRow>(&sql)
                    .bind(id.to_string())
                    .fetch_optional(&self.pool)
                    .await;
                found_or_missing(row, || format!("product {id} not found"))
            })
            .await
    }

    async fn get_by_name(&self, name: &str, cancel: &CancellationToken) -> DomainResult<Product> {
        ensure_active(cancel, "product lookup")
            .and_then_async(|()| async move {
                let sql = format!("{SELECT_PRODUCTS} WHERE p.name = ? ORDER BY p.rowid LIMIT 1");
                let row = sqlx::query_as::<_, ProductRow>(&sql)
                    .bind(name)
                    .fetch_optional(&self.pool)
                    .await;
                found_or_missing(row, || format!("product '{name}' not found"))
            })
            .await
    }

    async fn insert(&self, product: &Product, cancel: &CancellationToken) -> RepoResult {
        if cancel.is_cancelled() {
            return RepoResult::Failure(Error::cancelled("product insert was cancelled"));
        }
        let category = match require_category(product) {
            Ok(category) => category,
            Err(rejected) => return rejected,
        };
        let result =
            sqlx::query("INSERT INTO products (id, name, price, category_id) VALUES (?, ?, ?, ?)")
                .bind(product.id.to_string())
                .bind(product.name.as_str())
                .bind(product.price.value())
                .bind(category.id.to_string())
                .execute(&self.pool)
                .await;
        write_outcome(result)
    }

    async fn update(&self, product: &Product, cancel: &CancellationToken) -> RepoResult {
        if cancel.is_cancelled() {
            return RepoResult::Failure(Error::cancelled("product update was cancelled"));
        }
        let category = match require_category(product) {
            Ok(category) => category,
            Err(rejected) => return rejected,
        };
        let result =
            sqlx::query("UPDATE products SET name = ?, price = ?, category_id = ? WHERE id = ?")
                .bind(product.name.as_str())
                .bind(product.price.value())
                .bind(category.id.to_string())
                .bind(product.id.to_string())
                .execute(&self.pool)
                .await;
        match result {
            Ok(done) if done.rows_affected() == 0 => RepoResult::Failure(Error::not_found(
                format!("product {} not found", product.id),
            )),
            other => write_outcome(other),
        }
    }
}
