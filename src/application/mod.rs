pub mod commands;
pub mod dto;
pub mod inputs;
pub mod queries;
pub mod services;
