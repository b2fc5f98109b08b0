//! Search query and pagination types for product search.

use crate::ProductWithCategory;
use serde::{Deserialize, Serialize};

/// Default page number (pages are 1-based).
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort column for product search.
///
/// A closed set: caller-supplied column names resolve to one of these, so
/// nothing user-controlled ever reaches the ORDER BY clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Price,
    Stock,
    Id,
    Category,
}

impl SortField {
    /// Resolves a caller-supplied column name; unknown names fall back to
    /// [`SortField::Name`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "price" => Self::Price,
            "stock" => Self::Stock,
            "id" => Self::Id,
            "category" => Self::Category,
            _ => Self::Name,
        }
    }

    /// Returns the qualified column this field sorts on.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "product.name",
            Self::Price => "product.price",
            Self::Stock => "product.stock",
            Self::Id => "product.id",
            Self::Category => "product_category.name",
        }
    }
}

/// Sort direction for product search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Resolves a caller-supplied direction; anything that is not
    /// descending normalizes to ascending.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Filter, sort, and pagination parameters for product search.
///
/// Price bounds of `0` mean "unbounded": an explicit zero lower bound is
/// indistinguishable from no filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring filter on the product name.
    pub name: Option<String>,
    /// Exact-match filter on the category name.
    pub category: Option<String>,
    /// Lower price bound; `0` disables the filter.
    pub min_price: f64,
    /// Upper price bound; `0` disables the filter.
    pub max_price: f64,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Sort column.
    pub order_by: SortField,
    /// Sort direction.
    pub sort: SortDirection,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            min_price: 0.0,
            max_price: 0.0,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            order_by: SortField::default(),
            sort: SortDirection::default(),
        }
    }
}

impl ProductQuery {
    /// Returns the row offset for this page. Page 0 behaves as page 1.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.page_size)
    }

    /// Returns the row limit for this page.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of search results with pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    /// Matching products on this page, joined with their category name.
    pub products: Vec<ProductWithCategory>,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total matching rows across all pages.
    pub total_count: i64,
    /// Total page count, `ceil(total_count / page_size)`.
    pub total_pages: i64,
}

impl ProductPage {
    /// Creates a page, computing the total page count.
    #[must_use]
    pub fn new(
        products: Vec<ProductWithCategory>,
        page: u32,
        page_size: u32,
        total_count: i64,
    ) -> Self {
        let total_pages = if page_size > 0 {
            (total_count + i64::from(page_size) - 1) / i64::from(page_size)
        } else {
            0
        };

        Self {
            products,
            page,
            page_size,
            total_count,
            total_pages,
        }
    }

    /// Returns true when a further page of results exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        i64::from(self.page) < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parse() {
        assert_eq!(SortField::parse("price"), SortField::Price);
        assert_eq!(SortField::parse("Stock"), SortField::Stock);
        assert_eq!(SortField::parse("category"), SortField::Category);
        assert_eq!(SortField::parse(""), SortField::Name);
        assert_eq!(SortField::parse("drop table"), SortField::Name);
    }

    #[test]
    fn test_sort_direction_normalizes_to_ascending() {
        assert_eq!(SortDirection::parse("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::parse("DESC"), SortDirection::Descending);
        assert_eq!(SortDirection::parse("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(""), SortDirection::Ascending);
    }

    #[test]
    fn test_offset() {
        let query = ProductQuery {
            page: 3,
            page_size: 10,
            ..ProductQuery::default()
        };
        assert_eq!(query.offset(), 20);
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn test_offset_page_zero_behaves_as_first_page() {
        let query = ProductQuery {
            page: 0,
            page_size: 10,
            ..ProductQuery::default()
        };
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_total_pages_ceiling_division() {
        let page = ProductPage::new(Vec::new(), 1, 10, 25);
        assert_eq!(page.total_pages, 3);

        let exact = ProductPage::new(Vec::new(), 1, 10, 30);
        assert_eq!(exact.total_pages, 3);

        let empty = ProductPage::new(Vec::new(), 1, 10, 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        let page = ProductPage::new(Vec::new(), 1, 0, 25);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_has_next() {
        assert!(ProductPage::new(Vec::new(), 1, 10, 25).has_next());
        assert!(ProductPage::new(Vec::new(), 2, 10, 25).has_next());
        assert!(!ProductPage::new(Vec::new(), 3, 10, 25).has_next());
    }
}
