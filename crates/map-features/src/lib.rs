//! Map features for the hazard warning map.
//!
//! Turns source rows into buffer polygons and markers, collects them in a
//! [`MapSession`] and publishes the session as GeoJSON.

pub mod feature;
pub mod geojson;
pub mod icon;
pub mod pipeline;
pub mod popup;
pub mod session;
pub mod style;

pub use feature::{BufferFeature, MapFeature, MarkerFeature};
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use icon::MarkerIcon;
pub use pipeline::{
    render_batch, render_row, BatchReport, Diagnostic, DiagnosticKind, RenderOptions, RenderedRow,
};
pub use popup::format_popup;
pub use session::MapSession;
pub use style::PathStyle;

/// Media types used when publishing features.
pub mod media_types {
    /// GeoJSON media type
    pub const GEO_JSON: &str = "application/geo+json";
    /// JSON media type
    pub const JSON: &str = "application/json";
}
