//! Geodesy helpers for the warning map.
//!
//! - Great-circle distance and destination on a spherical Earth
//! - Circular buffer polygons around a point (ellipsoidal or spherical)
//! - Web Mercator projection into pixel viewports

pub mod buffer;
pub mod mercator;
pub mod sphere;

pub use buffer::{buffer_point, BufferError, BufferModel, BufferSpec};
pub use mercator::Viewport;
pub use sphere::{destination_point, haversine_distance, EARTH_RADIUS_KM};
