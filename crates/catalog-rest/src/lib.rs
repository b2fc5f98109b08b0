//! # Catalog REST
//!
//! REST API layer using Axum for the catalog service.
//! Provides HTTP endpoints for product and category management, product
//! search, and health checks.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
