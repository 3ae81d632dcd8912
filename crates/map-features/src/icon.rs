//! Marker icons.

use serde::{Deserialize, Serialize};
use warning_common::SeverityColor;

/// Image icon size in pixels.
pub const IMAGE_ICON_SIZE: [u32; 2] = [32, 32];
/// Image icon anchor: bottom center.
pub const IMAGE_ICON_ANCHOR: [i32; 2] = [16, 32];
/// Popup offset relative to the image icon anchor.
pub const IMAGE_POPUP_ANCHOR: [i32; 2] = [0, -30];
/// Dot icon size in pixels.
pub const DOT_ICON_SIZE: [u32; 2] = [12, 12];
/// Dot icon anchor: center.
pub const DOT_ICON_ANCHOR: [i32; 2] = [6, 6];

/// How a marker is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkerIcon {
    /// Remote image.
    Image {
        url: String,
        size: [u32; 2],
        anchor: [i32; 2],
        popup_anchor: [i32; 2],
    },
    /// Filled circle in the severity color.
    Dot {
        color: String,
        size: [u32; 2],
        anchor: [i32; 2],
    },
}

impl MarkerIcon {
    pub fn image(url: impl Into<String>) -> Self {
        MarkerIcon::Image {
            url: url.into(),
            size: IMAGE_ICON_SIZE,
            anchor: IMAGE_ICON_ANCHOR,
            popup_anchor: IMAGE_POPUP_ANCHOR,
        }
    }

    pub fn dot(color: SeverityColor) -> Self {
        MarkerIcon::Dot {
            color: color.hex().to_string(),
            size: DOT_ICON_SIZE,
            anchor: DOT_ICON_ANCHOR,
        }
    }

    /// Image icon when a URL is given, severity dot otherwise.
    pub fn for_record(icon_url: Option<&str>, color: SeverityColor) -> Self {
        match icon_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => MarkerIcon::image(url),
            None => MarkerIcon::dot(color),
        }
    }

    pub fn size(&self) -> [u32; 2] {
        match self {
            MarkerIcon::Image { size, .. } | MarkerIcon::Dot { size, .. } => *size,
        }
    }

    pub fn anchor(&self) -> [i32; 2] {
        match self {
            MarkerIcon::Image { anchor, .. } | MarkerIcon::Dot { anchor, .. } => *anchor,
        }
    }
}
