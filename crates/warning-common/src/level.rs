//! Warning levels and the severity color classifier.
//!
//! Warning levels arrive from the spreadsheet as loosely typed scalars. They
//! are kept in their raw form everywhere except at the classifier, which
//! normalizes them by stringifying and trimming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A warning level exactly as it arrived from the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RawLevel {
    /// Numeric cell value.
    Number(f64),
    /// Text cell value (untrimmed).
    Text(String),
    /// Column absent from the row.
    #[default]
    Missing,
}

impl RawLevel {
    /// Build a level from an optional CSV cell.
    pub fn from_cell(cell: Option<&str>) -> Self {
        match cell {
            Some(text) => RawLevel::Text(text.to_string()),
            None => RawLevel::Missing,
        }
    }

    /// The normalized form used for classification.
    pub fn normalized(&self) -> String {
        self.to_string().trim().to_string()
    }

    /// Severity color for this level.
    pub fn severity(&self) -> SeverityColor {
        classify(self)
    }
}

impl fmt::Display for RawLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display prints integral values without a fractional part,
            // so 2.0 renders as "2".
            RawLevel::Number(n) => write!(f, "{}", n),
            RawLevel::Text(s) => f.write_str(s),
            RawLevel::Missing => Ok(()),
        }
    }
}

impl From<&str> for RawLevel {
    fn from(s: &str) -> Self {
        RawLevel::Text(s.to_string())
    }
}

impl From<String> for RawLevel {
    fn from(s: String) -> Self {
        RawLevel::Text(s)
    }
}

impl From<f64> for RawLevel {
    fn from(n: f64) -> Self {
        RawLevel::Number(n)
    }
}

impl From<i64> for RawLevel {
    fn from(n: i64) -> Self {
        RawLevel::Number(n as f64)
    }
}

/// Fixed severity palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Yellow,
    Orange,
    Red,
    Grey,
}

impl SeverityColor {
    /// CSS hex form, e.g. `#FFA500`.
    pub fn hex(&self) -> &'static str {
        match self {
            SeverityColor::Yellow => "#FFFF00",
            SeverityColor::Orange => "#FFA500",
            SeverityColor::Red => "#FF0000",
            SeverityColor::Grey => "#808080",
        }
    }

    /// RGBA components at full opacity.
    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        parse_hex_color(self.hex())
    }
}

impl fmt::Display for SeverityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Map a warning level to its severity color.
///
/// Total: `"1"` is yellow, `"2"` orange, `"3"` red and everything else,
/// including empty and missing values, is grey.
pub fn classify(level: &RawLevel) -> SeverityColor {
    match level.normalized().as_str() {
        "1" => SeverityColor::Yellow,
        "2" => SeverityColor::Orange,
        "3" => SeverityColor::Red,
        _ => SeverityColor::Grey,
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into RGBA components.
///
/// Malformed input yields opaque black.
pub fn parse_hex_color(s: &str) -> (u8, u8, u8, u8) {
    let s = s.trim_start_matches('#');
    let channel = |i: usize| {
        s.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0)
    };

    match s.len() {
        6 => (channel(0), channel(2), channel(4), 255),
        8 => {
            let a = s
                .get(6..8)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(255);
            (channel(0), channel(2), channel(4), a)
        }
        _ => (0, 0, 0, 255),
    }
}
