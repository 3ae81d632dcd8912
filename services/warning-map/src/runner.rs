//! Load-then-render runs shared by the CLI commands and the HTTP service.

use map_features::{render_batch, BatchReport, MapSession, RenderOptions};
use sheet_source::{load_table, source_for, SourceError};
use tracing::{debug, info};
use warning_common::SourceRow;

use crate::config::{AppConfig, ReloadMode};

/// Fetch the configured table in a single attempt.
pub async fn load_rows(config: &AppConfig) -> Result<Vec<SourceRow>, SourceError> {
    let source = source_for(&config.source.locator, config.source.timeout())?;
    let table = load_table(source.as_ref()).await?;
    Ok(table.rows)
}

/// Render `rows` into `session`, honouring the reload mode.
pub fn render_into(
    rows: &[SourceRow],
    config: &AppConfig,
    session: &mut MapSession,
) -> BatchReport {
    if config.reload_mode == ReloadMode::Replace {
        let removed = session.clear();
        debug!(removed, "Cleared map session before render");
    }

    let options = RenderOptions {
        buffer: config.buffer,
    };
    render_batch(rows, &options, session)
}

/// One-shot run into a fresh session.
pub async fn run_once(config: &AppConfig) -> Result<(MapSession, BatchReport), SourceError> {
    let rows = load_rows(config).await?;
    let mut session = MapSession::new(config.map.clone());
    let report = render_into(&rows, config, &mut session);
    info!(features = session.len(), "Map session rendered");
    Ok((session, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{file_locator, orange_dot_row, write_csv_fixture, SCENARIO_CSV};

    fn config_for(locator: String) -> AppConfig {
        let mut config = AppConfig::default();
        config.source.locator = locator;
        config
    }

    #[test]
    fn test_accumulate_appends() {
        let config = AppConfig::default();
        let mut session = MapSession::default();
        let rows = vec![orange_dot_row()];

        render_into(&rows, &config, &mut session);
        render_into(&rows, &config, &mut session);
        assert_eq!(session.len(), 4);
    }

    #[test]
    fn test_replace_clears_first() {
        let mut config = AppConfig::default();
        config.reload_mode = ReloadMode::Replace;
        let mut session = MapSession::default();
        let rows = vec![orange_dot_row()];

        render_into(&rows, &config, &mut session);
        render_into(&rows, &config, &mut session);
        assert_eq!(session.len(), 2);
    }

    #[tokio::test]
    async fn test_run_once_from_file() {
        let fixture = write_csv_fixture(SCENARIO_CSV);
        let config = config_for(file_locator(&fixture));

        let (session, report) = run_once(&config).await.unwrap();
        assert_eq!(report.rows, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(session.markers().count(), 2);
        assert_eq!(session.buffers().count(), 2);
    }

    #[tokio::test]
    async fn test_run_once_missing_file_fails() {
        let config = config_for("/nonexistent/warnings.csv".to_string());
        assert!(matches!(
            run_once(&config).await,
            Err(SourceError::Io { .. })
        ));
    }
}
