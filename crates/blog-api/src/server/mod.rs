//! Server setup and initialization
//!
//! Provides the application builders and the server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use blog_common::{AppConfig, AppError, JwtService};
use blog_core::SnowflakeGenerator;
use blog_db::{create_pool, run_migrations, MemoryStore};
use blog_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Application with routes and the basic middleware stack (no rate limiting)
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    apply_middleware(router).with_state(state)
}

/// Application with rate limiting and CORS taken from the configuration.
/// Health probes are mounted outside the rate limiter.
///
/// # Errors
/// Returns `AppError::Config` for unusable rate limit settings
pub fn create_app_with_config(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let router = api.merge(apply_middleware(health_routes()));
    Ok(router.with_state(state))
}

/// Connect to PostgreSQL, run migrations and build the AppState.
/// `DATABASE_URL=memory` selects the in-process store instead.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    if config.database.is_in_memory() {
        info!("Using in-memory store");
        return Ok(create_memory_app_state(config, MemoryStore::new()));
    }

    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&blog_db::DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let (jwt_service, snowflake_generator) = shared_services(&config);
    let service_context = ServiceContext::postgres(pool, jwt_service, snowflake_generator);

    Ok(AppState::new(service_context, config))
}

/// AppState backed by the given in-process store
pub fn create_memory_app_state(config: AppConfig, store: MemoryStore) -> AppState {
    let (jwt_service, snowflake_generator) = shared_services(&config);
    let service_context = ServiceContext::in_memory(store, jwt_service, snowflake_generator);
    AppState::new(service_context, config)
}

fn shared_services(config: &AppConfig) -> (Arc<JwtService>, Arc<SnowflakeGenerator>) {
    (
        Arc::new(JwtService::from_config(&config.jwt)),
        Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)),
    )
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app_with_config(state)?;

    run_server(app, addr).await
}
