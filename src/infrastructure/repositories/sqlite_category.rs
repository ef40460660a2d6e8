// src/infrastructure/repositories/sqlite_category.rs
use super::{map_sqlx, parse_stored_id, write_outcome};
use crate::domain::cancellation::ensure_active;
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository};
use crate::domain::errors::{DomainResult, Error, RepoResult};
use crate::domain::validation::Validation;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: String,
    name: String,
}

impl CategoryRow {
    fn into_category(self) -> DomainResult<Category> {
        parse_stored_id(&self.id)
            .and_then(CategoryId::new)
            .zip_with(CategoryName::new(self.name), Category::restore)
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn get(&self, cancel: &CancellationToken) -> DomainResult<Vec<Category>> {
        ensure_active(cancel, "category listing")
            .and_then_async(|()| async move {
                match sqlx::query_as::<_, CategoryRow>(
                    "SELECT id, name FROM categories ORDER BY name",
                )
                .fetch_all(&self.pool)
                .await
                {
                    Ok(rows) => rows.into_iter().map(CategoryRow::into_category).collect(),
                    Err(err) => Validation::fail(map_sqlx(err)),
                }
            })
            .await
    }

    async fn get_by_id(&self, id: CategoryId, cancel: &CancellationToken) -> DomainResult<Category> {
        ensure_active(cancel, "category lookup")
            .and_then_async(|()| async move {
                let row = sqlx::query_as::<_, CategoryRow>(
                    "SELECT id, name FROM categories WHERE id = ?",
                )
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await;
                found_or_missing(row, || format!("category {id} not found"))
            })
            .await
    }

    async fn get_by_name(&self, name: &str, cancel: &CancellationToken) -> DomainResult<Category> {
        ensure_active(cancel, "category lookup")
            .and_then_async(|()| async move {
                let row = sqlx::query_as::<_, CategoryRow>(
                    "SELECT id, name FROM categories WHERE name = ?",
                )
                .bind(name)
                .fetch_optional(&self.pool)
                .await;
                found_or_missing(row, || format!("category '{name}' not found"))
            })
            .await
    }

    async fn insert(&self, category: &Category, cancel: &CancellationToken) -> RepoResult {
        if cancel.is_cancelled() {
            return RepoResult::Failure(Error::cancelled("category insert was cancelled"));
        }
        let result = sqlx::query("INSERT INTO categories (id, name) VALUES (?, ?)")
            .bind(category.id.to_string())
            .bind(category.name.as_str())
            .execute(&self.pool)
            .await;
        write_outcome(result)
    }
}

fn found_or_missing(
    row: Result<Option<CategoryRow>, sqlx::Error>,
    missing: impl FnOnce() -> String,
) -> DomainResult<Category> {
    match row {
        Ok(Some(row)) => row.into_category(),
        Ok(None) => Validation::fail(Error::not_found(missing())),
        Err(err) => Validation::fail(map_sqlx(err)),
    }
}
