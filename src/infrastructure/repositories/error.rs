use crate::domain::errors::{Error, RepoResult};
use sqlx::sqlite::SqliteQueryResult;

const UNIQUE_CATEGORY_NAME: &str = "categories.name";
const PRIMARY_CATEGORY_ID: &str = "categories.id";
const PRIMARY_PRODUCT_ID: &str = "products.id";

/// SQLite reports the failing column in the message rather than through
/// `constraint()`, so unique violations are told apart by message content.
pub fn map_sqlx(err: sqlx::Error) -> Error {
    match &err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|code| code.into_owned());
            let message = db_err.message();

            let mapped = if db_err.is_unique_violation() {
                if message.contains(UNIQUE_CATEGORY_NAME) {
                    Error::conflict("category name already exists")
                } else if message.contains(PRIMARY_CATEGORY_ID) {
                    Error::conflict("category id already exists")
                } else if message.contains(PRIMARY_PRODUCT_ID) {
                    Error::conflict("product id already exists")
                } else {
                    Error::conflict("unique constraint violated")
                }
            } else if db_err.is_foreign_key_violation() {
                Error::not_found("referenced category not found")
            } else if db_err.is_check_violation() {
                Error::validation("check constraint violated")
            } else {
                Error::persistence(message.to_string())
            };

            match code {
                Some(code) => mapped.with_code(code),
                None => mapped,
            }
        }
        _ => Error::persistence(err.to_string()),
    }
}

pub fn write_outcome(result: Result<SqliteQueryResult, sqlx::Error>) -> RepoResult {
    match result {
        Ok(_) => RepoResult::Success,
        Err(err) => RepoResult::Failure(map_sqlx(err)),
    }
}
