use super::CategoryDto;
use crate::domain::product::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub category: Option<CategoryDto>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let category = product.category().cloned().map(CategoryDto::from);
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            price: product.price.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        category::Category,
        product::{Price, ProductId, ProductName},
    };

    #[test]
    fn serializes_with_nested_category() {
        let category = Category::create("Tools").ok().unwrap();
        let product = Product::new(
            ProductId::generate(),
            ProductName::new("Widget").ok().unwrap(),
            Price::new(10).ok().unwrap(),
        )
        .with_category(category);

        let json = serde_json::to_value(ProductDto::from(product)).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], 10);
        assert_eq!(json["category"]["name"], "Tools");
    }
}
