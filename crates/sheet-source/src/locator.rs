//! Resource locators for the warning table.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::SourceError;

/// Where the table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// `http://` or `https://` URL.
    Http(String),
    /// `file://` URL or bare filesystem path.
    File(PathBuf),
}

impl FromStr for Locator {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SourceError::InvalidLocator(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Locator::Http(s.to_string()));
        }
        if lower.starts_with("file://") {
            return Ok(Locator::File(PathBuf::from(&s["file://".len()..])));
        }
        if s.contains("://") {
            return Err(SourceError::InvalidLocator(s.to_string()));
        }

        Ok(Locator::File(PathBuf::from(s)))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Http(url) => f.write_str(url),
            Locator::File(path) => write!(f, "file://{}", path.display()),
        }
    }
}
