//! Product category controller: lookup and management.

use crate::{
    responses::{bad_request, ApiResult, AppError, CategoryResponse, MessageResponse},
    state::AppState,
};
use catalog_core::{CategoryId, ProductCategory};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

/// Creates the category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/product-category", post(category_management))
        .route("/v1/product-category/:id", get(get_category_by_id))
}

/// Management request: an action plus the category fields it applies to.
#[derive(Debug, Deserialize)]
pub struct CategoryManagementRequest {
    #[serde(default)]
    pub action: String,
    #[serde(flatten)]
    pub category: ProductCategory,
}

/// `GET /v1/product-category/:id`
async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CategoryResponse> {
    debug!("Get product category request: {}", id);

    let id: CategoryId = id
        .parse()
        .map_err(|_| bad_request("Invalid Product Category ID"))?;

    let product_category = state.product_service.get_category(id).await?;

    Ok(Json(CategoryResponse {
        message: "Success".to_string(),
        product_category,
    }))
}

/// `POST /v1/product-category`: add, edit, or delete depending on
/// `action`.
async fn category_management(
    State(state): State<AppState>,
    Json(request): Json<CategoryManagementRequest>,
) -> Result<Response, AppError> {
    debug!("Category management request: {}", request.action);

    if request.action.is_empty() {
        return Err(bad_request("Missing required action parameter"));
    }

    match request.action.as_str() {
        "add" => {
            let id = state
                .product_service
                .create_category(request.category)
                .await?;

            Ok(Json(MessageResponse {
                message: format!("Successfully create new product category: {}", id),
            })
            .into_response())
        }
        "edit" => {
            if request.category.id.is_zero() {
                return Err(bad_request("Invalid request"));
            }

            let product_category = state
                .product_service
                .update_category(request.category)
                .await?;

            Ok(Json(CategoryResponse {
                message: "Successfully edit product category.".to_string(),
                product_category,
            })
            .into_response())
        }
        "delete" => {
            if request.category.id.is_zero() {
                return Err(bad_request("Invalid request"));
            }

            let id = request.category.id;
            state.product_service.delete_category(id).await?;

            Ok(Json(MessageResponse {
                message: format!("Successfully delete product category ID {}.", id),
            })
            .into_response())
        }
        _ => Err(bad_request("Invalid Action")),
    }
}
