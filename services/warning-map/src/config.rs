//! Service configuration loading and types.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use geodesy::BufferSpec;
use serde::{Deserialize, Serialize};
use warning_common::MapView;

/// Published spreadsheet the map renders by default.
pub const DEFAULT_SOURCE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSosfBP3StMyRUzwI0tUZPsLjPVH1zePCz8gZbTMOzjOvnonbmNCoy5VT46UxO0qdqb-Wm9EqTpXp8y/pub?gid=536600083&single=true&output=csv";

/// Root configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub buffer: BufferSpec,

    #[serde(default)]
    pub map: MapView,

    /// What a reload does with features already on the map.
    #[serde(default)]
    pub reload_mode: ReloadMode,

    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

impl AppConfig {
    /// Load from a YAML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Config file {} does not exist, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse: {:?}", path))?;

        tracing::info!(config = %path.display(), source = %config.source.locator, "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.locator.trim().is_empty() {
            bail!("source.locator must not be empty");
        }
        if self.source.timeout_secs == 0 {
            bail!("source.timeout_secs must be positive");
        }
        self.buffer
            .validate()
            .map_err(|e| anyhow::anyhow!("buffer: {}", e))?;
        if self.map.zoom > self.map.tile_layer.max_zoom {
            bail!(
                "map.zoom {} exceeds tile_layer.max_zoom {}",
                self.map.zoom,
                self.map.tile_layer.max_zoom
            );
        }
        if self.snapshot.width == 0 || self.snapshot.height == 0 {
            bail!("snapshot dimensions must be positive");
        }
        Ok(())
    }
}

/// Where the warning table comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// http(s) URL, `file://` URL or filesystem path.
    #[serde(default = "default_locator")]
    pub locator: String,

    /// Request timeout for remote sources.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_locator() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            locator: default_locator(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Reload behaviour for an existing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReloadMode {
    /// Append to what is already drawn; repeated loads duplicate features.
    #[default]
    Accumulate,
    /// Clear the session before drawing.
    Replace,
}

/// Default snapshot size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_width")]
    pub width: u32,
    #[serde(default = "default_snapshot_height")]
    pub height: u32,
}

fn default_snapshot_width() -> u32 {
    1024
}

fn default_snapshot_height() -> u32 {
    768
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            width: default_snapshot_width(),
            height: default_snapshot_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodesy::BufferModel;

    #[test]
    fn test_empty_yaml_is_all_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.source.locator, DEFAULT_SOURCE);
        assert_eq!(config.buffer.radius_km, 20.0);
        assert_eq!(config.reload_mode, ReloadMode::Accumulate);
        assert_eq!(config.map.zoom, 10);
    }

    #[test]
    fn test_overrides() {
        let yaml = r#"
source:
  locator: file:///data/warnings.csv
  timeout_secs: 5
buffer:
  radius_km: 10
  segments: 32
  model: spherical
map:
  center: [10.0, 120.0]
  zoom: 7
reload_mode: replace
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.source.locator, "file:///data/warnings.csv");
        assert_eq!(config.source.timeout(), Duration::from_secs(5));
        assert_eq!(config.buffer.radius_km, 10.0);
        assert_eq!(config.buffer.segments, 32);
        assert_eq!(config.buffer.model, BufferModel::Spherical);
        assert_eq!(config.map.center, [10.0, 120.0]);
        assert_eq!(config.map.tile_layer.max_zoom, 18);
        assert_eq!(config.reload_mode, ReloadMode::Replace);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(AppConfig::from_yaml("buffer:\n  radius_km: -1\n").is_err());
        assert!(AppConfig::from_yaml("buffer:\n  segments: 2\n").is_err());
        assert!(AppConfig::from_yaml("map:\n  zoom: 19\n").is_err());
        assert!(AppConfig::from_yaml("source:\n  locator: ''\n").is_err());
        assert!(AppConfig::from_yaml("reload_mode: sometimes\n").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load("/nonexistent/warning-map.yaml").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
