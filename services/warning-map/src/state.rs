//! Application state for the warning map service.

use chrono::{DateTime, Utc};
use map_features::{BatchReport, MapSession};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{error, info};
use warning_common::{WarnMapError, WarnMapResult};

use crate::config::AppConfig;
use crate::metrics;
use crate::runner;

/// Outcome of the most recent loads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadStatus {
    /// Successful loads since startup.
    pub loads: u64,
    pub last_report: Option<BatchReport>,
    /// Error from the most recent attempt, cleared on success.
    pub last_error: Option<String>,
    pub last_loaded_at: Option<DateTime<Utc>>,
}

/// Shared application state.
pub struct AppState {
    pub config: AppConfig,

    /// Features drawn so far. Reloads append or replace per `reload_mode`.
    pub session: RwLock<MapSession>,

    pub status: RwLock<LoadStatus>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let session = MapSession::new(config.map.clone());
        Self {
            config,
            session: RwLock::new(session),
            status: RwLock::new(LoadStatus::default()),
        }
    }

    /// Fetch the source and render it into the session.
    ///
    /// The fetch runs without holding any lock; a failed fetch leaves the
    /// session untouched.
    pub async fn refresh(&self) -> WarnMapResult<BatchReport> {
        let rows = match runner::load_rows(&self.config).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(source = %self.config.source.locator, error = %e, "Failed to load warning data");
                metrics::record_load_failure();
                self.status.write().await.last_error = Some(e.to_string());
                return Err(WarnMapError::SourceLoad(e.to_string()));
            }
        };

        let (report, features) = {
            let mut session = self.session.write().await;
            let report = runner::render_into(&rows, &self.config, &mut session);
            (report, session.len())
        };

        metrics::record_load(&report, features);
        info!(
            features,
            markers = report.markers,
            buffers = report.buffers,
            "Warning data loaded"
        );

        let mut status = self.status.write().await;
        status.loads += 1;
        status.last_report = Some(report.clone());
        status.last_error = None;
        status.last_loaded_at = Some(Utc::now());

        Ok(report)
    }
}
