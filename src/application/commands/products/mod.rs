// src/application/commands/products/mod.rs
mod create;
mod service;
mod update;

pub use service::ProductCommandService;
