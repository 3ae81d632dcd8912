//! CSV parsing with header-keyed rows.

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use warning_common::SourceRow;

use crate::error::SourceError;

/// A parsed table: header names plus data rows in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl ParsedTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Names from `expected` that the header lacks.
    pub fn missing_columns<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }
}

/// Parse CSV text whose first record is the header.
///
/// Blank lines are skipped. Records shorter than the header simply lack the
/// trailing fields; cells beyond the header are ignored.
pub fn parse_table(text: &str) -> Result<ParsedTable, SourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(SourceError::MissingHeader);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;

        if record.len() > headers.len() {
            debug!(
                row = rows.len() + 1,
                extra = record.len() - headers.len(),
                "Ignoring cells beyond the header"
            );
        }

        let mut row = SourceRow::new(rows.len() + 1);
        for (name, value) in headers.iter().zip(record.iter()) {
            if !name.is_empty() {
                row.fields.insert(name.clone(), value.to_string());
            }
        }
        rows.push(row);
    }

    Ok(ParsedTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_keyed_rows() {
        let table = parse_table("lat,lng,warning_level,icon_url\n14.17,121.25,2,\n").unwrap();
        assert_eq!(table.headers, vec!["lat", "lng", "warning_level", "icon_url"]);
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row.row, 1);
        assert_eq!(row.get("lat"), Some("14.17"));
        assert_eq!(row.get("lng"), Some("121.25"));
        assert_eq!(row.get("warning_level"), Some("2"));
        assert_eq!(row.get("icon_url"), Some(""));
    }

    #[test]
    fn test_empty_lines_skipped() {
        let text = "lat,lng,warning_level\n\n1,2,3\n\n\n4,5,1\n";
        let table = parse_table(text).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].row, 2);
        assert_eq!(table.rows[1].get("lat"), Some("4"));
    }

    #[test]
    fn test_crlf_and_quoted_fields() {
        let text = "lat,lng,warning_level,icon_url\r\n\"10\",120,\"9\",\"http://x/icon.png\"\r\n";
        let table = parse_table(text).unwrap();
        assert_eq!(table.rows[0].get("icon_url"), Some("http://x/icon.png"));
        assert_eq!(table.rows[0].get("warning_level"), Some("9"));
    }

    #[test]
    fn test_short_and_long_records() {
        let text = "lat,lng,warning_level,icon_url\n1,2\n3,4,1,,extra\n";
        let table = parse_table(text).unwrap();
        assert_eq!(table.rows[0].get("warning_level"), None);
        assert_eq!(table.rows[1].fields.len(), 4);
    }

    #[test]
    fn test_header_whitespace_and_bom() {
        let text = "\u{feff}lat , lng,warning_level\n1,2,3\n";
        let table = parse_table(text).unwrap();
        assert_eq!(table.headers, vec!["lat", "lng", "warning_level"]);
        assert_eq!(table.rows[0].get("lat"), Some("1"));
    }

    #[test]
    fn test_empty_body_has_no_header() {
        assert!(matches!(parse_table(""), Err(SourceError::MissingHeader)));
    }

    #[test]
    fn test_missing_columns() {
        let table = parse_table("lat,lng\n1,2\n").unwrap();
        assert_eq!(
            table.missing_columns(&["lat", "lng", "warning_level", "icon_url"]),
            vec!["warning_level", "icon_url"]
        );
    }

    #[test]
    fn test_cells_are_not_trimmed() {
        let table = parse_table("lat,lng,warning_level\n1,2, 2 \n").unwrap();
        assert_eq!(table.rows[0].get("warning_level"), Some(" 2 "));
    }
}
