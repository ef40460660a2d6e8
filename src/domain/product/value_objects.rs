use crate::domain::errors::{DomainResult, Error};
use crate::domain::validation::Validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const PRODUCT_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Validation::fail(Error::validation("product id cannot be nil"))
        } else {
            Validation::Success(Self(id))
        }
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Validation::fail(Error::validation("product name cannot be empty"));
        }
        if value.chars().count() > PRODUCT_NAME_MAX_LEN {
            return Validation::fail(Error::validation(format!(
                "product name cannot exceed {PRODUCT_NAME_MAX_LEN} characters"
            )));
        }
        Validation::Success(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            Validation::fail(Error::validation("product price must be greater than zero"))
        } else {
            Validation::Success(Self(value))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}
