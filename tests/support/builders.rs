// tests/support/builders.rs
use catalog_core::application::inputs::{CreateProductInput, UpdateProductInput};
use uuid::Uuid;

pub struct ProductInputBuilder {
    name: String,
    price: i64,
    category_name: String,
}

impl ProductInputBuilder {
    pub fn new() -> Self {
        Self {
            name: "Widget".into(),
            price: 10,
            category_name: "Tools".into(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn category(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = category_name.into();
        self
    }

    pub fn build(self) -> CreateProductInput {
        CreateProductInput {
            name: self.name,
            price: self.price,
            category_name: self.category_name,
        }
    }

    pub fn build_update(self, id: Uuid) -> UpdateProductInput {
        UpdateProductInput::new(id, self.name, self.price, self.category_name)
    }
}
