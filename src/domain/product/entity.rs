use crate::domain::category::Category;
use crate::domain::product::value_objects::{Price, ProductId, ProductName};

/// A product is only complete once a resolved category has been attached;
/// repositories refuse to persist one without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    category: Option<Category>,
}

impl Product {
    pub fn new(id: ProductId, name: ProductName, price: Price) -> Self {
        Self {
            id,
            name,
            price,
            category: None,
        }
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.set_category(category);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product::new(
            ProductId::generate(),
            ProductName::new("Widget").ok().unwrap(),
            Price::new(10).ok().unwrap(),
        )
    }

    #[test]
    fn new_product_has_no_category() {
        assert!(sample_product().category().is_none());
    }

    #[test]
    fn with_category_attaches_it() {
        let category = Category::create("Tools").ok().unwrap();
        let product = sample_product().with_category(category.clone());
        assert_eq!(product.category(), Some(&category));
    }
}
