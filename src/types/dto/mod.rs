// DTO layer - request/response models and per-endpoint ApiResponse enums

pub mod admin;
pub mod auth;
pub mod cars;
pub mod common;
pub mod customer;
