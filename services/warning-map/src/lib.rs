//! Hazard warning map service.
//!
//! Loads warning points from a CSV table, renders buffers and markers into a
//! map session and serves the session over HTTP.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod runner;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

/// Build the service router.
pub fn build_router(state: Arc<AppState>, prometheus: Option<PrometheusHandle>) -> Router {
    let router = Router::new()
        // Map page
        .route("/", get(handlers::page::map_page_handler))
        // Map API
        .route("/api/view", get(handlers::features::view_handler))
        .route("/api/features", get(handlers::features::features_handler))
        .route("/api/report", get(handlers::features::report_handler))
        .route("/api/reload", post(handlers::reload::reload_handler))
        .route("/api/snapshot.png", get(handlers::snapshot::snapshot_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        .layer(Extension(state));

    let router = match prometheus {
        Some(handle) => router.layer(Extension(handle)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

/// Log filter built only from the resolved `--log-level` value.
pub fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {}", level))
}
