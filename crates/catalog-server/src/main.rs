//! # Catalog Server
//!
//! Main entry point for the catalog service: loads configuration, connects
//! the PostgreSQL pool and the Redis cache, wires the layers together, and
//! serves the REST API until shutdown.

use catalog_config::ConfigLoader;
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::{create_pool, PgProductRepository};
use catalog_rest::{create_router, AppState};
use catalog_service::{CacheInterface, ProductCache, ProductServiceImpl, RedisCacheService};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting catalog server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> CatalogResult<()> {
    // Load configuration
    let config = ConfigLoader::from_default_location().load()?;

    info!("Environment: {}", config.app.environment);

    // Create database pool and bring the schema up to date
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Create Redis cache pool (if enabled)
    let cache: Arc<dyn CacheInterface> = if config.redis.enabled {
        let redis_cfg = deadpool_redis::Config::from_url(&config.redis.url);
        let pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| CatalogError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Arc::new(RedisCacheService::new(Arc::new(pool)))
    } else {
        info!("Redis disabled; running with a no-op cache");
        Arc::new(RedisCacheService::disabled())
    };

    // Wire the layers
    let repository = Arc::new(PgProductRepository::new(Arc::clone(&db_pool)));
    let product_service = Arc::new(ProductServiceImpl::new(
        repository,
        ProductCache::new(cache),
    ));

    let state = AppState::new(product_service);
    let router = create_router(state, &config.server);

    // Start REST server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::internal(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CatalogError::internal(format!("Server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
