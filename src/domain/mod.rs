pub mod cancellation;
pub mod category;
pub mod errors;
pub mod product;
pub mod validation;

pub use errors::{DomainResult, Error, ErrorKind, RepoResult};
pub use validation::{Errors, Validation};
