//! Typed cache gateway for catalog entities.

use super::{cache_keys, CacheExt, CacheInterface};
use catalog_core::{CatalogResult, CategoryId, Product, ProductCategory, ProductId};
use std::sync::Arc;
use std::time::Duration;

/// TTL for cached products (5 minutes).
pub const PRODUCT_TTL: Duration = Duration::from_secs(5 * 60);

/// TTL for cached product categories (1 minute).
pub const CATEGORY_TTL: Duration = Duration::from_secs(60);

/// Typed get/set operations over the raw cache transport, one entry per
/// entity with a per-entity-type expiry.
#[derive(Clone)]
pub struct ProductCache {
    cache: Arc<dyn CacheInterface>,
}

impl ProductCache {
    /// Creates a typed gateway over the given cache transport.
    #[must_use]
    pub fn new(cache: Arc<dyn CacheInterface>) -> Self {
        Self { cache }
    }

    /// Looks up a cached product. An absent entry is `Ok(None)`.
    pub async fn get_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        self.cache.get(&cache_keys::product(id)).await
    }

    /// Stores a product with the product TTL, overwriting any existing
    /// entry for that id.
    pub async fn set_product(&self, id: ProductId, product: &Product) -> CatalogResult<()> {
        self.cache
            .set(&cache_keys::product(id), product, PRODUCT_TTL)
            .await
    }

    /// Looks up a cached product category. An absent entry is `Ok(None)`.
    pub async fn get_category(&self, id: CategoryId) -> CatalogResult<Option<ProductCategory>> {
        self.cache.get(&cache_keys::product_category(id)).await
    }

    /// Stores a product category with the category TTL.
    pub async fn set_category(
        &self,
        id: CategoryId,
        category: &ProductCategory,
    ) -> CatalogResult<()> {
        self.cache
            .set(&cache_keys::product_category(id), category, CATEGORY_TTL)
            .await
    }
}

impl std::fmt::Debug for ProductCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCache").finish_non_exhaustive()
    }
}
