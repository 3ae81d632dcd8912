//! Map view and base layer configuration.

use serde::{Deserialize, Serialize};

/// Esri World Imagery tile template.
pub const DEFAULT_TILE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";

/// Attribution required by the World Imagery terms of use.
pub const DEFAULT_TILE_ATTRIBUTION: &str = "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community";

/// Initial map view: center, zoom and base layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Center as `[lat, lng]`, the order tile map widgets expect.
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    #[serde(default)]
    pub tile_layer: TileLayer,
}

fn default_center() -> [f64; 2] {
    [14.1672, 121.2464]
}

fn default_zoom() -> u8 {
    10
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            tile_layer: TileLayer::default(),
        }
    }
}

impl MapView {
    pub fn center_lat(&self) -> f64 {
        self.center[0]
    }

    pub fn center_lng(&self) -> f64 {
        self.center[1]
    }
}

/// Raster base layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    /// `{z}/{x}/{y}` URL template.
    #[serde(default = "default_tile_url")]
    pub url_template: String,

    #[serde(default = "default_attribution")]
    pub attribution: String,

    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
}

fn default_tile_url() -> String {
    DEFAULT_TILE_URL.to_string()
}

fn default_attribution() -> String {
    DEFAULT_TILE_ATTRIBUTION.to_string()
}

fn default_max_zoom() -> u8 {
    18
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: default_tile_url(),
            attribution: default_attribution(),
            max_zoom: default_max_zoom(),
        }
    }
}
