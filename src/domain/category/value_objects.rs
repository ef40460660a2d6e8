use crate::domain::errors::{DomainResult, Error};
use crate::domain::validation::Validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const CATEGORY_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Validation::fail(Error::validation("category id cannot be nil"))
        } else {
            Validation::Success(Self(id))
        }
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Case-sensitive and stored verbatim; "Tools" and "tools" are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Validation::fail(Error::validation("category name cannot be empty"));
        }
        if value.chars().count() > CATEGORY_NAME_MAX_LEN {
            return Validation::fail(Error::validation(format!(
                "category name cannot exceed {CATEGORY_NAME_MAX_LEN} characters"
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

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        for raw in ["", "   ", "\t"] {
            let errors = CategoryName::new(raw).into_result().unwrap_err();
            assert_eq!(errors.head().message(), "category name cannot be empty");
        }
    }

    #[test]
    fn names_keep_case_and_whitespace() {
        let name = CategoryName::new(" Tools").ok().unwrap();
        assert_eq!(name.as_str(), " Tools");
        assert_ne!(name, CategoryName::new("tools").ok().unwrap());
    }

    #[test]
    fn overlong_names_are_rejected() {
        let raw = "c".repeat(CATEGORY_NAME_MAX_LEN + 1);
        assert!(CategoryName::new(raw).is_failure());
        assert!(CategoryName::new("c".repeat(CATEGORY_NAME_MAX_LEN)).is_success());
    }

    #[test]
    fn nil_id_is_rejected() {
        assert!(CategoryId::new(Uuid::nil()).is_failure());
        assert!(CategoryId::new(Uuid::new_v4()).is_success());
    }
}
