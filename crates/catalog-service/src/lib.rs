//! # Catalog Service
//!
//! Business logic layer for the catalog service: the cache gateway and the
//! read-through and search orchestrators.

pub mod cache;
pub mod product_service;
pub mod product_service_impl;

pub use cache::*;
pub use product_service::*;
pub use product_service_impl::*;
