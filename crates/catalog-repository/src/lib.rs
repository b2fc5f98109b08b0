//! # Catalog Repository
//!
//! Store gateway for the catalog service: a PostgreSQL connection pool and
//! the [`ProductRepository`] trait with its SQLx implementation.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>   (store gateway interface)
//! PgProductRepository               (SQLx / PostgreSQL)
//!   ↓
//! PostgreSQL
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
