//! Unified error types for all layers of the catalog service.

use thiserror::Error;

/// Unified error type for the catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No row matched the requested identity.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Malformed or missing input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database transport or query failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Cache transport failure. An absent entry is not an error.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    /// Returns the HTTP status code for this error.
    ///
    /// Only input validation maps to 400; missing rows and backend faults
    /// share 500 at the HTTP boundary.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound { .. }
            | Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Creates a not found error for an entity.
    #[must_use]
    pub fn not_found<T: ToString>(entity: &'static str, id: T) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                entity: "row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::validation("bad id").status_code(), 400);
        assert_eq!(CatalogError::not_found("product", 1).status_code(), 500);
        assert_eq!(CatalogError::Database("gone".to_string()).status_code(), 500);
        assert_eq!(CatalogError::cache("down").status_code(), 500);
        assert_eq!(CatalogError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::not_found("product", 42);
        assert_eq!(err.to_string(), "product with id 42 not found");
    }

    #[test]
    fn test_validation_display() {
        let err = CatalogError::validation("price must be non-negative");
        assert!(err.to_string().contains("price must be non-negative"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<i64>("not a number").unwrap_err();
        let err = CatalogError::from(parse_err);
        assert!(matches!(err, CatalogError::Internal(_)));
    }
}
