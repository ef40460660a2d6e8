pub mod categories;
pub mod products;

pub use categories::CategoryQueryService;
pub use products::ProductQueryService;
