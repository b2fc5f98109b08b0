//! PostgreSQL product repository implementation.

use crate::{pool::DatabasePool, traits::ProductRepository};
use catalog_core::{
    CatalogError, CatalogResult, CategoryId, Product, ProductCategory, ProductId, ProductQuery,
    ProductWithCategory,
};
use async_trait::async_trait;
use sqlx::{FromRow, Postgres, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL product repository.
pub struct PgProductRepository {
    pool: Arc<DatabasePool>,
}

impl PgProductRepository {
    /// Creates a new PostgreSQL product repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    stock: i32,
    category_id: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            category_id: CategoryId::new(row.category_id),
        }
    }
}

/// Database row representation of a product category.
#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
}

impl From<CategoryRow> for ProductCategory {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.name,
        }
    }
}

/// Search result row: a product joined with its category name.
#[derive(Debug, FromRow)]
struct ProductWithCategoryRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    stock: i32,
    category_id: i64,
    category: String,
}

impl From<ProductWithCategoryRow> for ProductWithCategory {
    fn from(row: ProductWithCategoryRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            category_id: CategoryId::new(row.category_id),
            category: row.category,
        }
    }
}

const SEARCH_SELECT: &str = "SELECT product.id, product.name, product.description, \
     product.price, product.stock, product.category_id, \
     product_category.name AS category \
     FROM product \
     JOIN product_category ON product_category.id = product.category_id";

const SEARCH_COUNT: &str = "SELECT COUNT(*) \
     FROM product \
     JOIN product_category ON product_category.id = product.category_id";

/// Appends the conjunctive filter predicates shared by the select and the
/// count. A predicate is emitted only when its parameter is present:
/// empty strings and zero price bounds mean "no filter".
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ProductQuery) {
    builder.push(" WHERE 1 = 1");

    if let Some(name) = query.name.as_deref().filter(|s| !s.is_empty()) {
        builder
            .push(" AND product.name ILIKE ")
            .push_bind(format!("%{}%", name));
    }

    if let Some(category) = query.category.as_deref().filter(|s| !s.is_empty()) {
        builder
            .push(" AND product_category.name = ")
            .push_bind(category.to_owned());
    }

    if query.min_price > 0.0 {
        builder
            .push(" AND product.price >= ")
            .push_bind(query.min_price);
    }

    if query.max_price > 0.0 {
        builder
            .push(" AND product.price <= ")
            .push_bind(query.max_price);
    }
}

/// Appends the ORDER BY / LIMIT / OFFSET tail. The sort column comes from
/// the [`catalog_core::SortField`] whitelist, never from caller input.
fn push_order_and_page(builder: &mut QueryBuilder<'_, Postgres>, query: &ProductQuery) {
    builder
        .push(" ORDER BY ")
        .push(query.order_by.column())
        .push(" ")
        .push(query.sort.sql());

    builder.push(" LIMIT ").push_bind(query.limit());
    builder.push(" OFFSET ").push_bind(query.offset());
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_product_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, stock, category_id \
             FROM product WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn find_category_by_id(&self, id: CategoryId) -> CatalogResult<Option<ProductCategory>> {
        debug!("Finding product category by id: {}", id);

        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name FROM product_category WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(ProductCategory::from))
    }

    async fn insert_product(&self, product: &Product) -> CatalogResult<ProductId> {
        debug!("Inserting product: {}", product.name);

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO product (name, description, price, stock, category_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id.into_inner())
        .fetch_one(self.pool.inner())
        .await?;

        Ok(ProductId::new(id))
    }

    async fn insert_category(&self, category: &ProductCategory) -> CatalogResult<CategoryId> {
        debug!("Inserting product category: {}", category.name);

        let id: i64 =
            sqlx::query_scalar("INSERT INTO product_category (name) VALUES ($1) RETURNING id")
                .bind(&category.name)
                .fetch_one(self.pool.inner())
                .await?;

        Ok(CategoryId::new(id))
    }

    async fn update_product(&self, product: &Product) -> CatalogResult<Product> {
        if product.id.is_zero() {
            return Err(CatalogError::validation("product id is required for update"));
        }

        debug!("Updating product: {}", product.id);

        let result = sqlx::query(
            "UPDATE product SET name = $1, description = $2, price = $3, stock = $4, \
             category_id = $5 WHERE id = $6",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id.into_inner())
        .bind(product.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("product", product.id));
        }

        Ok(product.clone())
    }

    async fn update_category(&self, category: &ProductCategory) -> CatalogResult<ProductCategory> {
        if category.id.is_zero() {
            return Err(CatalogError::validation(
                "product category id is required for update",
            ));
        }

        debug!("Updating product category: {}", category.id);

        let result = sqlx::query("UPDATE product_category SET name = $1 WHERE id = $2")
            .bind(&category.name)
            .bind(category.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("product category", category.id));
        }

        Ok(category.clone())
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<bool> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_category(&self, id: CategoryId) -> CatalogResult<bool> {
        debug!("Deleting product category: {}", id);

        let result = sqlx::query("DELETE FROM product_category WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search_products(
        &self,
        query: &ProductQuery,
    ) -> CatalogResult<(Vec<ProductWithCategory>, i64)> {
        debug!(
            "Searching products, page: {}, page_size: {}",
            query.page, query.page_size
        );

        // The count runs over the filtered predicate set, not the page.
        let mut count_builder = QueryBuilder::<Postgres>::new(SEARCH_COUNT);
        push_filters(&mut count_builder, query);

        let total_count: i64 = count_builder
            .build_query_scalar()
            .fetch_one(self.pool.inner())
            .await?;

        let mut select_builder = QueryBuilder::<Postgres>::new(SEARCH_SELECT);
        push_filters(&mut select_builder, query);
        push_order_and_page(&mut select_builder, query);

        let rows: Vec<ProductWithCategoryRow> = select_builder
            .build_query_as()
            .fetch_all(self.pool.inner())
            .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total_count))
    }
}

impl std::fmt::Debug for PgProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgProductRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{SortDirection, SortField};

    fn filter_sql(query: &ProductQuery) -> String {
        let mut builder = QueryBuilder::<Postgres>::new(SEARCH_SELECT);
        push_filters(&mut builder, query);
        push_order_and_page(&mut builder, query);
        builder.into_sql()
    }

    #[test]
    fn test_no_filters_emits_no_predicates() {
        let sql = filter_sql(&ProductQuery::default());
        assert!(!sql.contains("ILIKE"));
        assert!(!sql.contains("product.price >="));
        assert!(!sql.contains("product.price <="));
        assert!(!sql.contains("product_category.name ="));
    }

    #[test]
    fn test_name_filter_uses_ilike() {
        let query = ProductQuery {
            name: Some("mug".to_string()),
            ..ProductQuery::default()
        };
        let sql = filter_sql(&query);
        assert!(sql.contains("product.name ILIKE $1"));
    }

    #[test]
    fn test_empty_name_filter_is_skipped() {
        let query = ProductQuery {
            name: Some(String::new()),
            ..ProductQuery::default()
        };
        let sql = filter_sql(&query);
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn test_price_bounds_are_conjunctive() {
        let query = ProductQuery {
            min_price: 10.0,
            max_price: 20.0,
            ..ProductQuery::default()
        };
        let sql = filter_sql(&query);
        assert!(sql.contains("product.price >= $1"));
        assert!(sql.contains("product.price <= $2"));
    }

    #[test]
    fn test_zero_price_bounds_mean_unbounded() {
        let query = ProductQuery {
            min_price: 0.0,
            max_price: 0.0,
            ..ProductQuery::default()
        };
        let sql = filter_sql(&query);
        assert!(!sql.contains("product.price >="));
        assert!(!sql.contains("product.price <="));
    }

    #[test]
    fn test_default_order_is_name_ascending() {
        let sql = filter_sql(&ProductQuery::default());
        assert!(sql.contains("ORDER BY product.name ASC"));
    }

    #[test]
    fn test_descending_price_order() {
        let query = ProductQuery {
            order_by: SortField::Price,
            sort: SortDirection::Descending,
            ..ProductQuery::default()
        };
        let sql = filter_sql(&query);
        assert!(sql.contains("ORDER BY product.price DESC"));
    }

    #[test]
    fn test_pagination_tail_is_bound() {
        let sql = filter_sql(&ProductQuery::default());
        assert!(sql.contains("LIMIT $1"));
        assert!(sql.contains("OFFSET $2"));
    }

    #[test]
    fn test_count_shares_the_predicate_set() {
        let query = ProductQuery {
            name: Some("mug".to_string()),
            category: Some("Kitchen".to_string()),
            ..ProductQuery::default()
        };

        let mut builder = QueryBuilder::<Postgres>::new(SEARCH_COUNT);
        push_filters(&mut builder, &query);
        let sql = builder.into_sql();

        assert!(sql.starts_with("SELECT COUNT(*)"));
        assert!(sql.contains("product.name ILIKE $1"));
        assert!(sql.contains("product_category.name = $2"));
        assert!(!sql.contains("LIMIT"));
    }
}
