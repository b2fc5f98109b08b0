//! Product category entity.

use crate::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// Names are expected to be unique so that search-by-category-name behaves
/// sensibly; uniqueness is not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCategory {
    /// Unique identifier, generated by the store. `0` means unset.
    pub id: CategoryId,

    /// Category name.
    pub name: String,
}
