//! Product service implementation: the read-through and search
//! orchestrators.

use crate::cache::ProductCache;
use crate::product_service::ProductService;
use catalog_core::{
    CatalogError, CatalogResult, CategoryId, Product, ProductCategory, ProductId, ProductPage,
    ProductQuery, ValidateExt,
};
use catalog_repository::ProductRepository;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Deadline for a detached cache population, independent of the request
/// that spawned it.
pub const POPULATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Product service implementation.
pub struct ProductServiceImpl<R: ProductRepository> {
    repository: Arc<R>,
    cache: ProductCache,
    populate_timeout: Duration,
}

impl<R: ProductRepository> ProductServiceImpl<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>, cache: ProductCache) -> Self {
        Self {
            repository,
            cache,
            populate_timeout: POPULATE_TIMEOUT,
        }
    }

    /// Overrides the detached population deadline.
    #[must_use]
    pub fn with_populate_timeout(mut self, timeout: Duration) -> Self {
        self.populate_timeout = timeout;
        self
    }
}

#[async_trait]
impl<R: ProductRepository + 'static> ProductService for ProductServiceImpl<R> {
    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        debug!("Getting product: {}", id);

        // A cache failure must never make a product unreachable: log it
        // and fall through to the store.
        match self.cache.get_product(id).await {
            Ok(Some(product)) if !product.id.is_zero() => {
                debug!("Cache hit for product: {}", id);
                return Ok(product);
            }
            Ok(_) => {}
            Err(e) => warn!("Cache read failed for product {}: {}", id, e),
        }

        let product = self
            .repository
            .find_product_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("product", id))?;

        // Repopulate from a detached task with its own deadline. The write
        // must not delay this response, and the caller going away must not
        // abort the write.
        let cache = self.cache.clone();
        let populate_timeout = self.populate_timeout;
        let cached = product.clone();
        tokio::spawn(async move {
            match tokio::time::timeout(populate_timeout, cache.set_product(id, &cached)).await {
                Ok(Ok(())) => debug!("Repopulated cache for product: {}", id),
                Ok(Err(e)) => warn!("Cache population failed for product {}: {}", id, e),
                Err(_) => warn!("Cache population timed out for product: {}", id),
            }
        });

        Ok(product)
    }

    async fn get_category(&self, id: CategoryId) -> CatalogResult<ProductCategory> {
        debug!("Getting product category: {}", id);

        self.repository
            .find_category_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("product category", id))
    }

    async fn create_product(&self, product: Product) -> CatalogResult<ProductId> {
        debug!("Creating product: {}", product.name);

        product.validate_request()?;

        let id = self.repository.insert_product(&product).await?;

        info!("Product created: {}", id);
        Ok(id)
    }

    async fn create_category(&self, category: ProductCategory) -> CatalogResult<CategoryId> {
        debug!("Creating product category: {}", category.name);

        let id = self.repository.insert_category(&category).await?;

        info!("Product category created: {}", id);
        Ok(id)
    }

    async fn update_product(&self, product: Product) -> CatalogResult<Product> {
        debug!("Updating product: {}", product.id);

        product.validate_request()?;

        let updated = self.repository.update_product(&product).await?;

        info!("Product updated: {}", updated.id);
        Ok(updated)
    }

    async fn update_category(&self, category: ProductCategory) -> CatalogResult<ProductCategory> {
        debug!("Updating product category: {}", category.id);

        let updated = self.repository.update_category(&category).await?;

        info!("Product category updated: {}", updated.id);
        Ok(updated)
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        debug!("Deleting product: {}", id);

        let deleted = self.repository.delete_product(id).await?;

        if !deleted {
            return Err(CatalogError::not_found("product", id));
        }

        info!("Product deleted: {}", id);
        Ok(())
    }

    async fn delete_category(&self, id: CategoryId) -> CatalogResult<()> {
        debug!("Deleting product category: {}", id);

        let deleted = self.repository.delete_category(id).await?;

        if !deleted {
            return Err(CatalogError::not_found("product category", id));
        }

        info!("Product category deleted: {}", id);
        Ok(())
    }

    async fn search_products(&self, query: ProductQuery) -> CatalogResult<ProductPage> {
        debug!(
            "Searching products, page: {}, page_size: {}",
            query.page, query.page_size
        );

        let (products, total_count) = self.repository.search_products(&query).await?;

        Ok(ProductPage::new(
            products,
            query.page,
            query.page_size,
            total_count,
        ))
    }
}

impl<R: ProductRepository> std::fmt::Debug for ProductServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}
