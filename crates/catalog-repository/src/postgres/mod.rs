//! PostgreSQL implementations.

pub mod product_repository;

pub use product_repository::PgProductRepository;
