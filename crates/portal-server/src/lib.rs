// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use portal_api::{
    ROUTE_HEALTH, ROUTE_IDENTITY, ROUTE_INTERN, ROUTE_INTERN_REWARDS, ROUTE_LEADERBOARD,
    ROUTE_LEADERBOARD_SUMMARY, ROUTE_ROOT,
};
use portal_store::{JsonFileSource, RecordSource};
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http;
mod middleware;

pub use config::{
    validate_startup_config, PortalConfig, CORS_ANY_ORIGIN, ENV_AUDIT_LOG, ENV_BIND_HOST,
    ENV_CORS_ORIGINS, ENV_DATA_FILE, ENV_LOG_JSON, ENV_PORT, ENV_SHUTDOWN_DRAIN_MS,
};

pub const CRATE_NAME: &str = "portal-server";

/// Shared per-process handles. Nothing here is mutated by requests except the
/// request id counter.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RecordSource>,
    pub config: Arc<PortalConfig>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>, config: PortalConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    /// State backed by the configured JSON data file.
    #[must_use]
    pub fn from_config(config: PortalConfig) -> Self {
        let source = Arc::new(JsonFileSource::new(config.data_file.clone()));
        Self::new(source, config)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_ROOT, get(http::handlers::root_handler))
        .route(ROUTE_HEALTH, get(http::handlers::health_handler))
        .route(ROUTE_INTERN, get(http::handlers::intern_handler))
        .route(
            ROUTE_INTERN_REWARDS,
            get(http::handlers::intern_rewards_handler),
        )
        .route(ROUTE_LEADERBOARD, get(http::handlers::leaderboard_handler))
        .route(
            ROUTE_LEADERBOARD_SUMMARY,
            get(http::handlers::leaderboard_summary_handler),
        )
        .route(ROUTE_IDENTITY, get(http::handlers::identity_handler))
        .fallback(http::handlers::not_found_handler)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::cors::cors_middleware,
        ))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .with_state(state)
}
