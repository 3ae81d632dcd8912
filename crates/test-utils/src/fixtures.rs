//! Warning table fixtures.

use warning_common::record::{ICON_COLUMN, LAT_COLUMN, LEVEL_COLUMN, LNG_COLUMN};
use warning_common::SourceRow;

/// Header line of a well-formed warning table.
pub const HEADER: &str = "lat,lng,warning_level,icon_url";

/// Three rows: orange dot, invalid latitude, grey image marker.
pub const SCENARIO_CSV: &str = "lat,lng,warning_level,icon_url
14.17,121.25,2,
abc,121.25,1,
10,120,9,http://x/icon.png
";

/// One row per known level plus an unknown one, with blank lines between.
pub const ALL_LEVELS_CSV: &str = "lat,lng,warning_level,icon_url
14.1,121.1,1,

14.2,121.2,2,
14.3,121.3,3,

14.4,121.4,,
";

/// A table whose latitude column is named differently.
pub const WRONG_HEADER_CSV: &str = "latitude,lng,warning_level
14.17,121.25,2
";

/// Build a source row from optional cell values.
pub fn row(
    index: usize,
    lat: Option<&str>,
    lng: Option<&str>,
    level: Option<&str>,
    icon: Option<&str>,
) -> SourceRow {
    let mut row = SourceRow::new(index);
    for (column, value) in [
        (LAT_COLUMN, lat),
        (LNG_COLUMN, lng),
        (LEVEL_COLUMN, level),
        (ICON_COLUMN, icon),
    ] {
        if let Some(value) = value {
            row.fields.insert(column.to_string(), value.to_string());
        }
    }
    row
}

/// Row `{lat: 14.17, lng: 121.25, warning_level: "2", icon_url: ""}`.
pub fn orange_dot_row() -> SourceRow {
    row(1, Some("14.17"), Some("121.25"), Some("2"), Some(""))
}

/// Row `{lat: "abc", lng: 121.25, warning_level: "1"}`.
pub fn invalid_lat_row() -> SourceRow {
    row(2, Some("abc"), Some("121.25"), Some("1"), None)
}

/// Row `{lat: 10, lng: 120, warning_level: "9", icon_url: "http://x/icon.png"}`.
pub fn grey_icon_row() -> SourceRow {
    row(3, Some("10"), Some("120"), Some("9"), Some("http://x/icon.png"))
}
