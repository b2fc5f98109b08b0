//! Product service trait definition.

use catalog_core::{
    CatalogResult, CategoryId, Product, ProductCategory, ProductId, ProductPage, ProductQuery,
};
use async_trait::async_trait;

/// Catalog use cases over products and product categories.
///
/// Callers never see whether a value came from the cache or the store.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Gets a product by ID, reading through the cache.
    async fn get_product(&self, id: ProductId) -> CatalogResult<Product>;

    /// Gets a product category by ID, straight from the store.
    async fn get_category(&self, id: CategoryId) -> CatalogResult<ProductCategory>;

    /// Creates a new product, returning the generated ID.
    async fn create_product(&self, product: Product) -> CatalogResult<ProductId>;

    /// Creates a new product category, returning the generated ID.
    async fn create_category(&self, category: ProductCategory) -> CatalogResult<CategoryId>;

    /// Updates an existing product.
    async fn update_product(&self, product: Product) -> CatalogResult<Product>;

    /// Updates an existing product category.
    async fn update_category(&self, category: ProductCategory) -> CatalogResult<ProductCategory>;

    /// Deletes a product by ID.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<()>;

    /// Deletes a product category by ID.
    async fn delete_category(&self, id: CategoryId) -> CatalogResult<()>;

    /// Runs a filtered, paginated product search.
    async fn search_products(&self, query: ProductQuery) -> CatalogResult<ProductPage>;
}
