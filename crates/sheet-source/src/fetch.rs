//! Single-attempt table fetchers.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::SourceError;
use crate::locator::Locator;

/// A place the raw table text can be fetched from.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Fetch the whole table body. One attempt, no retry.
    async fn fetch_text(&self) -> Result<String, SourceError>;
}

/// Fetches a published spreadsheet over HTTP(S).
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl TableSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_text(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| SourceError::Network {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SourceError::Network {
                url: self.url.clone(),
                source,
            })?;

        debug!(bytes = body.len(), "Fetched table");
        Ok(body)
    }
}

/// Reads a table from the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TableSource for FileSource {
    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Build the fetcher for a locator string.
pub fn source_for(locator: &str, timeout: Duration) -> Result<Box<dyn TableSource>, SourceError> {
    match locator.parse::<Locator>()? {
        Locator::Http(url) => Ok(Box::new(HttpSource::new(url, timeout)?)),
        Locator::File(path) => Ok(Box::new(FileSource::new(path))),
    }
}
