//! Error types shared by the warning map services.

use thiserror::Error;

/// Result type alias using WarnMapError.
pub type WarnMapResult<T> = Result<T, WarnMapError>;

/// Errors surfaced at the service boundary.
#[derive(Debug, Error)]
pub enum WarnMapError {
    #[error("Failed to load warning data: {0}")]
    SourceLoad(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl WarnMapError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            WarnMapError::InvalidParameter { .. } => 400,
            WarnMapError::SourceLoad(_) => 502,
            _ => 500,
        }
    }
}

impl From<serde_json::Error> for WarnMapError {
    fn from(err: serde_json::Error) -> Self {
        WarnMapError::InternalError(format!("JSON error: {}", err))
    }
}
