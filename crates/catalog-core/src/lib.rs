//! # Catalog Core
//!
//! Core types, errors, and domain entities for the catalog service.
//! This crate provides the foundational abstractions used across all layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod search;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use search::*;
pub use validation::*;
