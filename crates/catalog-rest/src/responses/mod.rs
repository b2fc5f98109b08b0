//! API response types.

use catalog_core::{CatalogError, Product, ProductCategory, ProductPage};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_message: String,
}

/// Plain acknowledgement response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A product lookup or edit response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

/// A category lookup or edit response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub message: String,
    pub product_category: ProductCategory,
}

/// Search response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: SearchData,
}

/// Search payload: the result page plus a link to the next page when one
/// exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(flatten)]
    pub page: ProductPage,
    pub next_page_url: Option<String>,
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub CatalogError);

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorBody {
            error_message: self.0.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper for a 400 response with the given message.
pub fn bad_request(message: impl Into<String>) -> AppError {
    AppError(CatalogError::validation(message))
}
