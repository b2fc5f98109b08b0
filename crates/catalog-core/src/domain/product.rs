//! Product entity.

use crate::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog product.
///
/// `category_id` must name an existing category for the product to be
/// valid; referential integrity is enforced only by the store's foreign
/// key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Product {
    /// Unique identifier, generated by the store. `0` means unset.
    pub id: ProductId,

    /// Product name.
    pub name: String,

    /// Product description.
    pub description: String,

    /// Unit price.
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// Units in stock.
    #[validate(range(min = 0))]
    pub stock: i32,

    /// Owning category.
    pub category_id: CategoryId,
}

/// A product joined with its category name, the row shape returned by
/// search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductWithCategory {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: CategoryId,
    /// Joined category name.
    pub category: String,
}
