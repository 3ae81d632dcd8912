//! Classifier behaviour across the value shapes the spreadsheet produces.

use warning_common::{classify, RawLevel, SeverityColor};

// ============================================================================
// Totality
// ============================================================================

#[test]
fn test_every_input_yields_a_color() {
    let inputs: Vec<RawLevel> = vec![
        "1".into(),
        "2".into(),
        "3".into(),
        "".into(),
        " ".into(),
        "4".into(),
        "9".into(),
        "01".into(),
        "1.0".into(),
        "three".into(),
        RawLevel::Number(0.0),
        RawLevel::Number(-2.0),
        RawLevel::Number(f64::NAN),
        RawLevel::Missing,
    ];

    for input in inputs {
        // Must not panic and must be deterministic.
        assert_eq!(classify(&input), classify(&input.clone()));
    }
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_same_color_as_trimmed_string_form() {
    let padded = [" 1", "2 ", " 3 ", "\t2\t", " 4 "];
    for text in padded {
        let raw = RawLevel::from(text);
        let trimmed = RawLevel::from(text.trim());
        assert_eq!(classify(&raw), classify(&trimmed), "{:?}", text);
    }
}

#[test]
fn test_numbers_match_their_string_form() {
    assert_eq!(classify(&RawLevel::Number(1.0)), SeverityColor::Yellow);
    assert_eq!(classify(&RawLevel::Number(2.0)), SeverityColor::Orange);
    assert_eq!(classify(&RawLevel::Number(3.0)), SeverityColor::Red);
    assert_eq!(classify(&RawLevel::Number(4.0)), SeverityColor::Grey);
}

#[test]
fn test_leading_zero_is_not_a_known_level() {
    assert_eq!(classify(&"01".into()), SeverityColor::Grey);
    assert_eq!(classify(&"1.0".into()), SeverityColor::Grey);
}

#[test]
fn test_severity_shortcut() {
    assert_eq!(RawLevel::from("3").severity(), SeverityColor::Red);
    assert_eq!(RawLevel::Missing.severity(), SeverityColor::Grey);
}
