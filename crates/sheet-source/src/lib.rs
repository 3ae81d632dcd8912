//! Data source loader for the warning table.
//!
//! Fetches a CSV resource (published spreadsheet URL or local file) in a
//! single attempt and turns it into header-keyed [`SourceRow`]s in source
//! order. Failures are returned to the caller untouched; nothing here
//! retries.
//!
//! [`SourceRow`]: warning_common::SourceRow

pub mod error;
pub mod fetch;
pub mod locator;
pub mod parse;

pub use error::SourceError;
pub use fetch::{source_for, FileSource, HttpSource, TableSource};
pub use locator::Locator;
pub use parse::{parse_table, ParsedTable};

use tracing::{info, warn};
use warning_common::record::EXPECTED_COLUMNS;

/// Fetch and parse the table behind `source`.
pub async fn load_table(source: &dyn TableSource) -> Result<ParsedTable, SourceError> {
    let origin = source.describe();
    let text = source.fetch_text().await?;
    let table = parse_table(&text)?;

    let missing = table.missing_columns(&EXPECTED_COLUMNS);
    if !missing.is_empty() {
        warn!(source = %origin, missing = ?missing, "Warning table is missing expected columns");
    }

    info!(source = %origin, rows = table.rows.len(), "Loaded warning table");
    Ok(table)
}
