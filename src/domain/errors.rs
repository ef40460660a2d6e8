// src/domain/errors.rs
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::domain::validation::Validation;

pub type DomainResult<T> = Validation<Error, T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Persistence,
    Cancelled,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Persistence => "persistence",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A single failure reason. Identity is purely structural: two errors with the
/// same kind, message and code are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, msg)
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Persistence, msg)
    }

    pub fn cancelled(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Cancelled, msg)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

/// Outcome of a repository write. Expected storage conditions (conflicts,
/// missing rows) come back as `Failure`, never as a panic.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoResult {
    Success,
    Failure(Error),
}

impl RepoResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Success carries `value` forward; failure becomes a single-error `Failure`.
    pub fn into_validation<T>(self, value: T) -> DomainResult<T> {
        match self {
            Self::Success => Validation::Success(value),
            Self::Failure(error) => Validation::fail(error),
        }
    }
}
