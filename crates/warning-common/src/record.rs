//! Source rows and typed warning records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::level::RawLevel;

/// Column holding the latitude.
pub const LAT_COLUMN: &str = "lat";
/// Column holding the longitude.
pub const LNG_COLUMN: &str = "lng";
/// Column holding the warning level.
pub const LEVEL_COLUMN: &str = "warning_level";
/// Optional column holding a marker icon URL.
pub const ICON_COLUMN: &str = "icon_url";

/// All columns the pipeline reads.
pub const EXPECTED_COLUMNS: [&str; 4] = [LAT_COLUMN, LNG_COLUMN, LEVEL_COLUMN, ICON_COLUMN];

/// One data row of the source table, keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    /// 1-based position among the data rows (header excluded).
    pub row: usize,

    /// Cell values by column name.
    pub fields: BTreeMap<String, String>,
}

impl SourceRow {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl fmt::Display for SourceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} {{", self.row)?;
        for (i, (k, v)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", k, v)?;
        }
        f.write_str("}")
    }
}

/// Why a row could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing '{0}' value")]
    MissingCoordinate(&'static str),

    #[error("invalid '{column}' value {value:?}")]
    InvalidCoordinate { column: &'static str, value: String },
}

/// A validated warning point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningRecord {
    /// Source row number.
    pub row: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub warning_level: RawLevel,
    /// Non-empty icon URL, if any.
    pub icon_url: Option<String>,
}

impl WarningRecord {
    /// Type a source row. Fails only on unusable coordinates.
    pub fn from_row(row: &SourceRow) -> Result<Self, RecordError> {
        let latitude = parse_coordinate(row, LAT_COLUMN)?;
        let longitude = parse_coordinate(row, LNG_COLUMN)?;

        let icon_url = row
            .get(ICON_COLUMN)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(Self {
            row: row.row,
            latitude,
            longitude,
            warning_level: RawLevel::from_cell(row.get(LEVEL_COLUMN)),
            icon_url,
        })
    }
}

fn parse_coordinate(row: &SourceRow, column: &'static str) -> Result<f64, RecordError> {
    let raw = row
        .get(column)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(RecordError::MissingCoordinate(column))?;

    match numeric_prefix(raw).and_then(|p| p.parse::<f64>().ok()) {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(RecordError::InvalidCoordinate {
            column,
            value: raw.to_string(),
        }),
    }
}

/// Longest leading decimal number in `text`: sign, digits with an optional
/// fraction, optional exponent. Trailing text such as units is ignored.
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut i = end + 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_end = digits_from(i);
        if exp_end > i {
            end = exp_end;
        }
    }

    Some(&text[..end])
}
