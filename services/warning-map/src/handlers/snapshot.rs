//! PNG snapshot handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use snapshot::{render_snapshot, SnapshotError, SnapshotOptions};
use warning_common::WarnMapError;

use super::error_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SnapshotQuery {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// GET /api/snapshot.png - Raster snapshot of the session
pub async fn snapshot_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SnapshotQuery>,
) -> Response {
    let options = SnapshotOptions {
        width: query.width.unwrap_or(state.config.snapshot.width),
        height: query.height.unwrap_or(state.config.snapshot.height),
        ..SnapshotOptions::default()
    };

    let session = state.session.read().await;
    match render_snapshot(&session, &options) {
        Ok(png) => (StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Err(e @ SnapshotError::InvalidSize { .. }) => error_response(&WarnMapError::InvalidParameter {
            param: "width/height".to_string(),
            message: e.to_string(),
        }),
        Err(e) => error_response(&WarnMapError::RenderError(e.to_string())),
    }
}
