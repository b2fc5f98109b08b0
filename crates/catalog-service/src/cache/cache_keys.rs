//! Cache key generators for consistent key naming.

use catalog_core::{CategoryId, ProductId};

/// Generate the cache key for a product by ID.
#[must_use]
pub fn product(id: ProductId) -> String {
    format!("product:{}", id)
}

/// Generate the cache key for a product category by ID.
#[must_use]
pub fn product_category(id: CategoryId) -> String {
    format!("product_category:{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_key() {
        assert_eq!(product(ProductId::new(42)), "product:42");
    }

    #[test]
    fn test_product_category_key() {
        assert_eq!(product_category(CategoryId::new(7)), "product_category:7");
    }
}
