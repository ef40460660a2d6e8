pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Category;
pub use repository::CategoryRepository;
pub use value_objects::{CATEGORY_NAME_MAX_LEN, CategoryId, CategoryName};
