#![forbid(unsafe_code)]
//! Portfolio HTTP server: router, handlers, request tracing and the
//! in-memory store behind them.

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http;
mod middleware;
mod store;

pub use config::{validate_startup_config_contract, ConfigError, ServerConfig};
pub use store::memory::InMemoryPortfolioStore;
pub use store::PortfolioStore;

pub const CRATE_NAME: &str = "bijux-portfolio-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PortfolioStore>,
    pub config: Arc<ServerConfig>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PortfolioStore>) -> Self {
        Self::with_config(store, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn PortfolioStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::landing_handler))
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/openapi.json", get(http::handlers::openapi_handler))
        .route("/portfolio", get(http::handlers::portfolio_handler))
        .route("/portfolio/", get(http::handlers::portfolio_handler))
        .route(
            "/portfolio/projects",
            get(http::handlers::list_projects_handler)
                .post(http::handlers::create_project_handler),
        )
        .route(
            "/portfolio/projects/:project_id",
            get(http::handlers::project_handler),
        )
        .route(
            "/static/*path",
            get(http::static_assets::static_asset_handler),
        )
        .fallback(http::handlers::route_not_found_handler)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
