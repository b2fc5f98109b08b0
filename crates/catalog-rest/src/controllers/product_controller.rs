//! Product controller: lookup, management, and search.

use crate::{
    responses::{bad_request, ApiResult, AppError, MessageResponse, ProductResponse, SearchData, SearchResponse},
    state::AppState,
};
use catalog_core::{
    Product, ProductId, ProductPage, ProductQuery, SortDirection, SortField, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/product", post(product_management))
        .route("/v1/product/search", get(search_products))
        .route("/v1/product/:id", get(get_product_by_id))
}

/// Management request: an action plus the product fields it applies to.
#[derive(Debug, Deserialize)]
pub struct ProductManagementRequest {
    #[serde(default)]
    pub action: String,
    #[serde(flatten)]
    pub product: Product,
}

/// Query parameters for product search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
}

impl From<SearchParams> for ProductQuery {
    fn from(params: SearchParams) -> Self {
        Self {
            name: params.name,
            category: params.category,
            min_price: params.min_price.unwrap_or(0.0),
            max_price: params.max_price.unwrap_or(0.0),
            page: params.page.unwrap_or(DEFAULT_PAGE),
            page_size: params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            order_by: params
                .order_by
                .as_deref()
                .map(SortField::parse)
                .unwrap_or_default(),
            sort: params
                .sort
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
        }
    }
}

/// `GET /v1/product/:id`
async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    let id: ProductId = id.parse().map_err(|_| bad_request("Invalid Product ID"))?;

    let product = state.product_service.get_product(id).await?;

    Ok(Json(ProductResponse {
        message: "Success".to_string(),
        product,
    }))
}

/// `POST /v1/product`: add, edit, or delete depending on `action`.
async fn product_management(
    State(state): State<AppState>,
    Json(request): Json<ProductManagementRequest>,
) -> Result<Response, AppError> {
    debug!("Product management request: {}", request.action);

    if request.action.is_empty() {
        return Err(bad_request("Missing required action parameter"));
    }

    match request.action.as_str() {
        "add" => {
            let id = state.product_service.create_product(request.product).await?;

            Ok(Json(MessageResponse {
                message: format!("Successfully create new product: {}", id),
            })
            .into_response())
        }
        "edit" => {
            if request.product.id.is_zero() {
                return Err(bad_request("Invalid request"));
            }

            let product = state.product_service.update_product(request.product).await?;

            Ok(Json(ProductResponse {
                message: "Successfully edit product.".to_string(),
                product,
            })
            .into_response())
        }
        "delete" => {
            if request.product.id.is_zero() {
                return Err(bad_request("Invalid request"));
            }

            let id = request.product.id;
            state.product_service.delete_product(id).await?;

            Ok(Json(MessageResponse {
                message: format!("Successfully delete product ID {}.", id),
            })
            .into_response())
        }
        _ => Err(bad_request("Invalid Action")),
    }
}

/// `GET /v1/product/search`
async fn search_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> ApiResult<SearchResponse> {
    let query = ProductQuery::from(params);
    debug!("Search products request, page: {}", query.page);

    let page = state.product_service.search_products(query.clone()).await?;
    let next_page_url = next_page_url(&headers, &query, &page);

    Ok(Json(SearchResponse {
        data: SearchData {
            page,
            next_page_url,
        },
    }))
}

/// Builds the next-page link, present only when a further page exists.
fn next_page_url(headers: &HeaderMap, query: &ProductQuery, page: &ProductPage) -> Option<String> {
    if !page.has_next() {
        return None;
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    Some(format!(
        "{}/v1/product/search?name={}&category={}&min_price={:.0}&max_price={:.0}&page={}&page_size={}",
        host,
        query.name.as_deref().unwrap_or_default(),
        query.category.as_deref().unwrap_or_default(),
        query.min_price,
        query.max_price,
        query.page + 1,
        query.page_size,
    ))
}
