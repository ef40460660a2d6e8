// src/domain/cancellation.rs
use tokio_util::sync::CancellationToken;

use crate::domain::errors::{DomainResult, Error};
use crate::domain::validation::Validation;

/// Checked before each repository call. A write that has already started is
/// never interrupted; cancellation only prevents the next step from running.
pub fn ensure_active(token: &CancellationToken, operation: &str) -> DomainResult<()> {
    if token.is_cancelled() {
        Validation::fail(Error::cancelled(format!("{operation} was cancelled")))
    } else {
        Validation::Success(())
    }
}
