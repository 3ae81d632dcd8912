//! HTTP request handlers for the warning map service.

pub mod features;
pub mod health;
pub mod page;
pub mod reload;
pub mod snapshot;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use warning_common::WarnMapError;

/// JSON error body with the status mapped from the error.
pub fn error_response(err: &WarnMapError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
