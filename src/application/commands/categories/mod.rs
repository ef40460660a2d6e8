// src/application/commands/categories/mod.rs
mod create;
mod get_or_create;
mod service;

pub use service::CategoryCommandService;
