//! # Catalog Config
//!
//! Layered configuration loading for the catalog service.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
