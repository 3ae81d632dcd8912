//! File-backed loader behaviour.

use std::time::Duration;

use sheet_source::{load_table, source_for, FileSource, SourceError};
use test_utils::{file_locator, write_csv_fixture, ALL_LEVELS_CSV, SCENARIO_CSV, WRONG_HEADER_CSV};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_load_scenario_table_in_order() {
    let file = write_csv_fixture(SCENARIO_CSV);
    let source = source_for(&file_locator(&file), TIMEOUT).unwrap();

    let table = load_table(source.as_ref()).await.unwrap();
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0].get("lat"), Some("14.17"));
    assert_eq!(table.rows[1].get("lat"), Some("abc"));
    assert_eq!(table.rows[2].get("icon_url"), Some("http://x/icon.png"));
    assert_eq!(
        table.rows.iter().map(|r| r.row).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[tokio::test]
async fn test_blank_lines_do_not_become_rows() {
    let file = write_csv_fixture(ALL_LEVELS_CSV);
    let table = load_table(&FileSource::new(file.path())).await.unwrap();
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[3].get("warning_level"), Some(""));
}

#[tokio::test]
async fn test_bare_path_locator() {
    let file = write_csv_fixture(SCENARIO_CSV);
    let locator = file.path().display().to_string();
    let source = source_for(&locator, TIMEOUT).unwrap();
    assert!(source.describe().starts_with("file://"));
    assert_eq!(load_table(source.as_ref()).await.unwrap().rows.len(), 3);
}

#[tokio::test]
async fn test_missing_columns_still_load() {
    let file = write_csv_fixture(WRONG_HEADER_CSV);
    let table = load_table(&FileSource::new(file.path())).await.unwrap();
    assert!(!table.has_column("lat"));
    assert_eq!(table.rows.len(), 1);
}

#[tokio::test]
async fn test_missing_file_is_a_load_failure() {
    let source = FileSource::new("/nonexistent/warnings.csv");
    let err = load_table(&source).await.unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/warnings.csv"));
}

#[tokio::test]
async fn test_empty_file_is_a_load_failure() {
    let file = write_csv_fixture("");
    let err = load_table(&FileSource::new(file.path())).await.unwrap_err();
    assert!(matches!(err, SourceError::MissingHeader));
}

#[tokio::test]
async fn test_unreachable_http_source_fails_once() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let source = source_for("http://127.0.0.1:9/warnings.csv", Duration::from_secs(2)).unwrap();
    let err = load_table(source.as_ref()).await.unwrap_err();
    assert!(matches!(err, SourceError::Network { .. }));
}
