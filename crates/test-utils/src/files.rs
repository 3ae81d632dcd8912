//! Temporary file helpers.

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a fresh `.csv` temp file. Deleted on drop.
pub fn write_csv_fixture(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// `file://` locator for a temp file.
pub fn file_locator(file: &NamedTempFile) -> String {
    format!("file://{}", file.path().display())
}
