//! Marker popup content.

use warning_common::RawLevel;

/// Popup HTML for a marker: raw level plus coordinates to 4 decimals.
pub fn format_popup(level: &RawLevel, lat: f64, lng: f64) -> String {
    format!(
        "Warning Level: {}<br>Lat: {:.4}, Lng: {:.4}",
        escape_html(&level.to_string()),
        lat,
        lng
    )
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_text() {
        assert_eq!(
            format_popup(&"2".into(), 14.17, 121.25),
            "Warning Level: 2<br>Lat: 14.1700, Lng: 121.2500"
        );
    }

    #[test]
    fn test_popup_keeps_raw_level() {
        let popup = format_popup(&" 9 ".into(), -0.123456, 10.0);
        assert_eq!(popup, "Warning Level:  9 <br>Lat: -0.1235, Lng: 10.0000");
    }

    #[test]
    fn test_popup_escapes_markup() {
        let popup = format_popup(&"<b>3</b>".into(), 0.0, 0.0);
        assert!(popup.starts_with("Warning Level: &lt;b&gt;3&lt;/b&gt;<br>"));
    }

    #[test]
    fn test_missing_level_is_blank() {
        assert!(format_popup(&RawLevel::Missing, 1.0, 2.0).starts_with("Warning Level: <br>"));
    }
}
