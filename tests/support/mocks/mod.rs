// tests/support/mocks/mod.rs
#![allow(dead_code)]

pub mod category_repo;
pub mod product_repo;

pub use category_repo::RecordingCategoryRepo;
pub use product_repo::RecordingProductRepo;
