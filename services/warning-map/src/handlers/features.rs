//! View, feature and report handlers.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use map_features::media_types;
use serde_json::json;
use warning_common::{MapView, WarnMapError};

use super::error_response;
use crate::state::AppState;

/// GET /api/view - Map view and tile layer
pub async fn view_handler(Extension(state): Extension<Arc<AppState>>) -> Json<MapView> {
    Json(state.config.map.clone())
}

/// GET /api/features - Session as a GeoJSON FeatureCollection
///
/// Fails with 502 only when the last load failed and nothing was ever drawn.
pub async fn features_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let session = state.session.read().await;

    if session.is_empty() {
        if let Some(message) = state.status.read().await.last_error.clone() {
            return error_response(&WarnMapError::SourceLoad(message));
        }
    }

    let body = match serde_json::to_vec(&session.to_feature_collection()) {
        Ok(body) => body,
        Err(e) => return error_response(&WarnMapError::from(e)),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, media_types::GEO_JSON)],
        body,
    )
        .into_response()
}

/// GET /api/report - Last batch report and load status
pub async fn report_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let status = state.status.read().await.clone();
    let features = state.session.read().await.len();
    Json(json!({
        "loads": status.loads,
        "features": features,
        "last_loaded_at": status.last_loaded_at,
        "last_error": status.last_error,
        "report": status.last_report,
    }))
}
