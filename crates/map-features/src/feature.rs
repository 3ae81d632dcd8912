//! Rendered map features.

use geo::Polygon;
use serde_json::Value;
use warning_common::RawLevel;

use crate::geojson::{Feature, Geometry};
use crate::icon::MarkerIcon;
use crate::style::PathStyle;

/// Hazard buffer polygon around a warning point.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferFeature {
    pub row: usize,
    pub warning_level: RawLevel,
    /// Source point as (lon, lat).
    pub center: (f64, f64),
    pub polygon: Polygon<f64>,
    pub style: PathStyle,
}

/// Point marker with a popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerFeature {
    pub row: usize,
    pub warning_level: RawLevel,
    pub lat: f64,
    pub lng: f64,
    pub icon: MarkerIcon,
    pub popup: String,
}

/// Anything the map session can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum MapFeature {
    Buffer(BufferFeature),
    Marker(MarkerFeature),
}

impl MapFeature {
    pub fn row(&self) -> usize {
        match self {
            MapFeature::Buffer(b) => b.row,
            MapFeature::Marker(m) => m.row,
        }
    }

    /// GeoJSON form. Properties carry everything needed to draw the feature.
    pub fn to_geojson(&self) -> Feature {
        match self {
            MapFeature::Buffer(buffer) => Feature::new(Geometry::from_polygon(&buffer.polygon))
                .with_property("kind", "buffer")
                .with_property("row", buffer.row)
                .with_property("warning_level", to_value(&buffer.warning_level))
                .with_property("style", to_value(&buffer.style)),
            MapFeature::Marker(marker) => Feature::new(Geometry::point(marker.lng, marker.lat))
                .with_property("kind", "marker")
                .with_property("row", marker.row)
                .with_property("warning_level", to_value(&marker.warning_level))
                .with_property("icon", to_value(&marker.icon))
                .with_property("popup", marker.popup.clone()),
        }
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    // Plain data types; serialization cannot fail.
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl From<BufferFeature> for MapFeature {
    fn from(feature: BufferFeature) -> Self {
        MapFeature::Buffer(feature)
    }
}

impl From<MarkerFeature> for MapFeature {
    fn from(feature: MarkerFeature) -> Self {
        MapFeature::Marker(feature)
    }
}
