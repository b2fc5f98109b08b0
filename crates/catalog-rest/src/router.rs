//! Main application router.

use crate::{
    controllers::{category_controller, health_controller, product_controller},
    middleware::logging_middleware,
    state::AppState,
};
use catalog_config::ServerConfig;
use axum::{middleware, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .merge(product_controller::router())
        .merge(category_controller::router())
        .with_state(state);

    let router = Router::new()
        .merge(health_controller::router())
        .merge(api_router)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with catalog REST endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{
        CatalogError, CatalogResult, CategoryId, Product, ProductCategory, ProductId, ProductPage,
        ProductQuery, ProductWithCategory,
    };
    use catalog_service::ProductService;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Stub service backing the router tests. Product 7 and category 3
    /// exist; search pretends there are 25 matching rows.
    struct StubProductService;

    fn product_fixture() -> Product {
        Product {
            id: ProductId::new(7),
            name: "Mug".to_string(),
            description: "Ceramic".to_string(),
            price: 9.5,
            stock: 12,
            category_id: CategoryId::new(3),
        }
    }

    #[async_trait]
    impl ProductService for StubProductService {
        async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
            if id == ProductId::new(7) {
                Ok(product_fixture())
            } else {
                Err(CatalogError::not_found("product", id))
            }
        }

        async fn get_category(&self, id: CategoryId) -> CatalogResult<ProductCategory> {
            if id == CategoryId::new(3) {
                Ok(ProductCategory {
                    id,
                    name: "Kitchen".to_string(),
                })
            } else {
                Err(CatalogError::not_found("product category", id))
            }
        }

        async fn create_product(&self, _product: Product) -> CatalogResult<ProductId> {
            Ok(ProductId::new(1))
        }

        async fn create_category(&self, _category: ProductCategory) -> CatalogResult<CategoryId> {
            Ok(CategoryId::new(2))
        }

        async fn update_product(&self, product: Product) -> CatalogResult<Product> {
            Ok(product)
        }

        async fn update_category(&self, category: ProductCategory) -> CatalogResult<ProductCategory> {
            Ok(category)
        }

        async fn delete_product(&self, _id: ProductId) -> CatalogResult<()> {
            Ok(())
        }

        async fn delete_category(&self, _id: CategoryId) -> CatalogResult<()> {
            Ok(())
        }

        async fn search_products(&self, query: ProductQuery) -> CatalogResult<ProductPage> {
            let row = ProductWithCategory {
                id: ProductId::new(7),
                name: "Mug".to_string(),
                description: "Ceramic".to_string(),
                price: 9.5,
                stock: 12,
                category_id: CategoryId::new(3),
                category: "Kitchen".to_string(),
            };
            let remaining = 25 - i64::from(query.page.saturating_sub(1)) * i64::from(query.page_size);
            let on_page = remaining.clamp(0, i64::from(query.page_size)) as usize;
            Ok(ProductPage::new(
                vec![row; on_page],
                query.page,
                query.page_size,
                25,
            ))
        }
    }

    fn test_router() -> Router {
        create_router(
            AppState::new(Arc::new(StubProductService)),
            &ServerConfig::default(),
        )
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("host", "catalog.test")
            .body(Body::empty())
            .unwrap()
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_product_success() {
        let (status, body) = send(get("/v1/product/7")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Success");
        assert_eq!(body["product"]["id"], 7);
        assert_eq!(body["product"]["name"], "Mug");
    }

    #[tokio::test]
    async fn test_get_product_malformed_id() {
        let (status, body) = send(get("/v1/product/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_message"]
            .as_str()
            .unwrap()
            .contains("Invalid Product ID"));
    }

    #[tokio::test]
    async fn test_get_product_missing_is_500() {
        let (status, body) = send(get("/v1/product/999")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error_message"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_get_category_success() {
        let (status, body) = send(get("/v1/product-category/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["product_category"]["name"], "Kitchen");
    }

    #[tokio::test]
    async fn test_get_category_malformed_id() {
        let (status, body) = send(get("/v1/product-category/xyz")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_message"]
            .as_str()
            .unwrap()
            .contains("Invalid Product Category ID"));
    }

    #[tokio::test]
    async fn test_management_missing_action() {
        let (status, body) = send(post("/v1/product", json!({"name": "Mug"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_message"]
            .as_str()
            .unwrap()
            .contains("Missing required action parameter"));
    }

    #[tokio::test]
    async fn test_management_unknown_action() {
        let (status, body) = send(post("/v1/product", json!({"action": "upsert"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_message"].as_str().unwrap().contains("Invalid Action"));
    }

    #[tokio::test]
    async fn test_management_add() {
        let (status, body) = send(post(
            "/v1/product",
            json!({"action": "add", "name": "Mug", "price": 9.5, "stock": 12, "category_id": 3}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully create new product: 1");
    }

    #[tokio::test]
    async fn test_management_edit_rejects_zero_id() {
        let (status, _body) = send(post(
            "/v1/product",
            json!({"action": "edit", "id": 0, "name": "Mug"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_management_delete_rejects_zero_id() {
        let (status, _body) = send(post("/v1/product", json!({"action": "delete"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_management_edit() {
        let (status, body) = send(post(
            "/v1/product",
            json!({"action": "edit", "id": 7, "name": "Tall Mug", "price": 11.0, "category_id": 3}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully edit product.");
        assert_eq!(body["product"]["name"], "Tall Mug");
    }

    #[tokio::test]
    async fn test_management_delete() {
        let (status, body) = send(post("/v1/product", json!({"action": "delete", "id": 9}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully delete product ID 9.");
    }

    #[tokio::test]
    async fn test_category_management_add() {
        let (status, body) = send(post(
            "/v1/product-category",
            json!({"action": "add", "name": "Kitchen"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully create new product category: 2");
    }

    #[tokio::test]
    async fn test_category_management_edit_rejects_zero_id() {
        let (status, _body) = send(post(
            "/v1/product-category",
            json!({"action": "edit", "name": "Kitchen"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_first_page_has_next_link() {
        let (status, body) = send(get("/v1/product/search?page=1&page_size=10")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total_count"], 25);
        assert_eq!(body["data"]["total_pages"], 3);
        let url = body["data"]["next_page_url"].as_str().unwrap();
        assert!(url.starts_with("catalog.test/v1/product/search?"));
        assert!(url.contains("page=2"));
    }

    #[tokio::test]
    async fn test_search_last_page_has_no_next_link() {
        let (status, body) = send(get("/v1/product/search?page=3&page_size=10")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["products"].as_array().unwrap().len(), 5);
        assert!(body["data"]["next_page_url"].is_null());
    }

    #[tokio::test]
    async fn test_search_defaults() {
        let (status, body) = send(get("/v1/product/search")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["page"], 1);
        assert_eq!(body["data"]["page_size"], 10);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
