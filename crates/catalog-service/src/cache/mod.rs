//! Cache gateway: transport abstraction, Redis implementation, and the
//! typed per-entity wrapper.

pub mod cache_interface;
pub mod cache_keys;
pub mod product_cache;
pub mod redis_cache;

pub use cache_interface::*;
pub use product_cache::*;
pub use redis_cache::*;
