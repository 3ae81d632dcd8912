//! Loader errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain or parse the source table. Always fatal to a load.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid source locator '{0}'")]
    InvalidLocator(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table near line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("table has no header row")]
    MissingHeader,
}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        SourceError::Parse {
            line,
            message: err.to_string(),
        }
    }
}
