// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory;
mod sqlite_category;
mod sqlite_product;

pub use error::{map_sqlx, write_outcome};
pub use in_memory::{InMemoryCategoryRepository, InMemoryProductRepository};
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_product::SqliteProductRepository;

use crate::domain::errors::{DomainResult, Error};
use crate::domain::validation::Validation;
use uuid::Uuid;

fn parse_stored_id(raw: &str) -> DomainResult<Uuid> {
    match Uuid::parse_str(raw) {
        Ok(id) => Validation::Success(id),
        Err(err) => Validation::fail(Error::persistence(format!(
            "stored identifier '{raw}' is not a valid uuid: {err}"
        ))),
    }
}
