use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;

/// Created once per distinct name and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
}

impl Category {
    /// Validates `name` and assigns a fresh identifier.
    pub fn create(name: impl Into<String>) -> DomainResult<Self> {
        CategoryName::new(name).map(|name| Self {
            id: CategoryId::generate(),
            name,
        })
    }

    /// Rebuilds a category that already has an identity (e.g. loaded from storage).
    pub fn restore(id: CategoryId, name: CategoryName) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_distinct_ids() {
        let first = Category::create("Tools").ok().unwrap();
        let second = Category::create("Tools").ok().unwrap();
        assert_eq!(first.name, second.name);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn create_fails_for_empty_name() {
        assert!(Category::create("").is_failure());
    }
}
