//! Reload handler.

use std::sync::Arc;

use axum::{extract::Extension, response::{IntoResponse, Response}, Json};
use tracing::info;

use super::error_response;
use crate::state::AppState;

/// POST /api/reload - Re-run the pipeline against the source
pub async fn reload_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    info!(mode = ?state.config.reload_mode, "Reload requested");
    match state.refresh().await {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(&e),
    }
}
