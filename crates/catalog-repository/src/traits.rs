//! Repository trait definitions.

use catalog_core::{
    CatalogResult, CategoryId, Product, ProductCategory, ProductId, ProductQuery,
    ProductWithCategory,
};
use async_trait::async_trait;

/// Store gateway for products and product categories.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Finds a product by ID.
    async fn find_product_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Finds a product category by ID.
    async fn find_category_by_id(&self, id: CategoryId) -> CatalogResult<Option<ProductCategory>>;

    /// Inserts a new product, returning the generated ID.
    async fn insert_product(&self, product: &Product) -> CatalogResult<ProductId>;

    /// Inserts a new product category, returning the generated ID.
    async fn insert_category(&self, category: &ProductCategory) -> CatalogResult<CategoryId>;

    /// Updates an existing product by identity. Fails if the ID is unset.
    async fn update_product(&self, product: &Product) -> CatalogResult<Product>;

    /// Updates an existing product category by identity. Fails if the ID is
    /// unset.
    async fn update_category(&self, category: &ProductCategory) -> CatalogResult<ProductCategory>;

    /// Deletes a product by ID, returning whether a row was deleted.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<bool>;

    /// Deletes a product category by ID, returning whether a row was
    /// deleted.
    async fn delete_category(&self, id: CategoryId) -> CatalogResult<bool>;

    /// Runs a filtered, sorted, paginated product search, returning the
    /// matching page and the total count over the same predicate set.
    async fn search_products(
        &self,
        query: &ProductQuery,
    ) -> CatalogResult<(Vec<ProductWithCategory>, i64)>;
}
