//! Web Mercator projection into a pixel viewport.

use std::f64::consts::PI;

use warning_common::BoundingBox;

/// Latitude limit of the square Web Mercator world.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Project lon/lat to normalized Web Mercator world coordinates in `[0, 1]`.
///
/// `y` grows southwards, matching raster row order.
pub fn lonlat_to_world(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
    let x = (lon + 180.0) / 360.0;
    let lat_rad = lat.to_radians();
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0;
    (x, y)
}

/// Maps geographic coordinates to pixels of a fixed-size image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// World x at the left edge.
    origin_x: f64,
    /// World y at the top edge.
    origin_y: f64,
    /// Pixels per world unit.
    scale: f64,
}

impl Viewport {
    /// Fit `bbox` (degrees) into `width`×`height`, keeping the aspect ratio
    /// and centering the slack.
    pub fn fit(bbox: &BoundingBox, width: u32, height: u32) -> Self {
        let (x0, y1) = lonlat_to_world(bbox.min_x, bbox.min_y);
        let (x1, y0) = lonlat_to_world(bbox.max_x, bbox.max_y);

        let world_w = (x1 - x0).max(f64::EPSILON);
        let world_h = (y1 - y0).max(f64::EPSILON);
        let scale = (width as f64 / world_w).min(height as f64 / world_h);

        let slack_x = (width as f64 / scale - world_w) / 2.0;
        let slack_y = (height as f64 / scale - world_h) / 2.0;

        Self {
            width,
            height,
            origin_x: x0 - slack_x,
            origin_y: y0 - slack_y,
            scale,
        }
    }

    /// Viewport centered on a point at a slippy-map zoom level (256 px tiles).
    pub fn centered(lon: f64, lat: f64, zoom: u8, width: u32, height: u32) -> Self {
        let scale = 256.0 * 2f64.powi(zoom as i32);
        let (cx, cy) = lonlat_to_world(lon, lat);
        Self {
            width,
            height,
            origin_x: cx - width as f64 / 2.0 / scale,
            origin_y: cy - height as f64 / 2.0 / scale,
            scale,
        }
    }

    /// Pixel position of a lon/lat point.
    pub fn project(&self, lon: f64, lat: f64) -> (f32, f32) {
        let (x, y) = lonlat_to_world(lon, lat);
        (
            ((x - self.origin_x) * self.scale) as f32,
            ((y - self.origin_y) * self.scale) as f32,
        )
    }
}
