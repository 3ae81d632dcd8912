//! Path styles for buffer polygons.

use serde::{Deserialize, Serialize};
use warning_common::SeverityColor;

/// Fill opacity of hazard buffers.
pub const BUFFER_FILL_OPACITY: f64 = 0.3;

/// Stroke width of hazard buffers, in pixels.
pub const BUFFER_STROKE_WEIGHT: f64 = 2.0;

/// Vector path style, named after the tile map widget's path options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    /// Stroke color.
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    /// Stroke width.
    pub weight: f64,
}

impl PathStyle {
    /// Buffer style: stroke and fill in the severity color.
    pub fn buffer(color: SeverityColor) -> Self {
        Self {
            color: color.hex().to_string(),
            fill_color: color.hex().to_string(),
            fill_opacity: BUFFER_FILL_OPACITY,
            weight: BUFFER_STROKE_WEIGHT,
        }
    }
}
