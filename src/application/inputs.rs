// src/application/inputs.rs
//! Raw request payloads and the constructors that turn them into domain
//! entities. Field checks are independent of each other, so every failing
//! field is reported at once.

use crate::domain::{
    category::Category,
    errors::{DomainResult, Error},
    product::{Price, Product, ProductId, ProductName},
    validation::Validation,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    pub name: String,
}

impl CreateCategoryInput {
    pub fn to_category(&self) -> DomainResult<Category> {
        Category::create(self.name.clone())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: String,
    pub price: i64,
    pub category_name: String,
}

impl CreateProductInput {
    /// Builds an unpersisted product with a fresh id and no category.
    pub fn to_product(&self) -> DomainResult<Product> {
        ProductName::new(self.name.clone()).zip_with(Price::new(self.price), |name, price| {
            Product::new(ProductId::generate(), name, price)
        })
    }
}

impl From<&UpdateProductInput> for CreateProductInput {
    fn from(input: &UpdateProductInput) -> Self {
        Self {
            name: input.name.clone(),
            price: input.price,
            category_name: input.category_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductInput {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub category_name: String,
    #[serde(skip)]
    category: Option<Category>,
}

impl UpdateProductInput {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        price: i64,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category_name: category_name.into(),
            category: None,
        }
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    /// Checks id, name and price without looking at the category.
    pub fn validate_fields(&self) -> DomainResult<()> {
        ProductId::new(self.id)
            .zip(ProductName::new(self.name.clone()))
            .zip(Price::new(self.price))
            .map(|_| ())
    }

    /// Requires the category to have been resolved beforehand; the product
    /// keeps the identifier carried by the input.
    pub fn to_product(&self) -> DomainResult<Product> {
        let category = match &self.category {
            Some(category) => Validation::Success(category.clone()),
            None => Validation::fail(Error::validation(
                "product category has not been resolved",
            )),
        };

        ProductId::new(self.id)
            .zip(ProductName::new(self.name.clone()))
            .zip(Price::new(self.price))
            .zip(category)
            .map(|(((id, name), price), category)| {
                Product::new(id, name, price).with_category(category)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, price: i64) -> CreateProductInput {
        CreateProductInput {
            name: name.into(),
            price,
            category_name: "Tools".into(),
        }
    }

    #[test]
    fn create_input_builds_product_without_category() {
        let product = create_input("Widget", 10).to_product().ok().unwrap();
        assert_eq!(product.name.as_str(), "Widget");
        assert_eq!(product.price.value(), 10);
        assert!(product.category().is_none());
    }

    #[test]
    fn create_input_reports_every_invalid_field() {
        let errors = create_input("", 0).to_product().into_result().unwrap_err();
        let messages: Vec<_> = errors.iter().map(Error::message).collect();
        assert_eq!(
            messages,
            vec![
                "product name cannot be empty",
                "product price must be greater than zero"
            ]
        );
    }

    #[test]
    fn update_input_requires_resolved_category() {
        let input = UpdateProductInput::new(Uuid::new_v4(), "Widget", 10, "Tools");
        let errors = input.to_product().into_result().unwrap_err();
        assert_eq!(
            errors.head().message(),
            "product category has not been resolved"
        );
    }

    #[test]
    fn update_input_keeps_id_and_category() {
        let id = Uuid::new_v4();
        let category = Category::create("Tools").ok().unwrap();
        let mut input = UpdateProductInput::new(id, "Widget", 12, "Tools");
        input.set_category(category.clone());

        let product = input.to_product().ok().unwrap();
        assert_eq!(product.id.as_uuid(), id);
        assert_eq!(product.category(), Some(&category));
    }

    #[test]
    fn validate_fields_ignores_missing_category() {
        let input = UpdateProductInput::new(Uuid::new_v4(), "Widget", 10, "Tools");
        assert!(input.validate_fields().is_success());

        let invalid = UpdateProductInput::new(Uuid::new_v4(), "", 10, "Tools");
        assert_eq!(invalid.validate_fields().errors().map(|e| e.len()), Some(1));
    }

    #[test]
    fn update_input_accumulates_nil_id_and_bad_fields() {
        let input = UpdateProductInput::new(Uuid::nil(), " ", -1, "Tools");
        let errors = input.to_product().into_result().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn create_input_deserializes_camel_case() {
        let input: CreateProductInput =
            serde_json::from_str(r#"{"name":"Widget","price":10,"categoryName":"Tools"}"#)
                .unwrap();
        assert_eq!(input.category_name, "Tools");
    }

    #[test]
    fn create_category_input_validates_name() {
        let input = CreateCategoryInput { name: String::new() };
        assert!(input.to_category().is_failure());
    }
}
