//! Circular buffer polygons around a point.
//!
//! Vertices are placed by walking a fixed distance from the center along
//! evenly spaced bearings, so the ring stays circular on the ground at any
//! latitude instead of stretching the way a degree-space circle would.

use geo::{Coord, GeodesicDestination, LineString, Point, Polygon, Winding};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sphere::destination_point;

/// Default buffer radius.
pub const DEFAULT_RADIUS_KM: f64 = 20.0;

/// Default number of ring segments.
pub const DEFAULT_SEGMENTS: usize = 64;

/// Earth model used to place ring vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BufferModel {
    /// Direct geodesic problem on the WGS84 ellipsoid.
    #[default]
    Geodesic,
    /// Great-circle destination on a 6371 km sphere.
    Spherical,
}

/// Buffer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BufferSpec {
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    #[serde(default = "default_segments")]
    pub segments: usize,

    #[serde(default)]
    pub model: BufferModel,
}

fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

fn default_segments() -> usize {
    DEFAULT_SEGMENTS
}

impl Default for BufferSpec {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            segments: DEFAULT_SEGMENTS,
            model: BufferModel::default(),
        }
    }
}

impl BufferSpec {
    pub fn validate(&self) -> Result<(), BufferError> {
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(BufferError::InvalidRadius(self.radius_km));
        }
        if self.segments < 3 {
            return Err(BufferError::TooFewSegments(self.segments));
        }
        Ok(())
    }
}

/// Errors raised while building a buffer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BufferError {
    #[error("center ({lon}, {lat}) is not a finite coordinate")]
    InvalidCenter { lon: f64, lat: f64 },

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("buffer radius must be a positive number of kilometers, got {0}")]
    InvalidRadius(f64),

    #[error("a buffer ring needs at least 3 segments, got {0}")]
    TooFewSegments(usize),

    #[error("longitude {0} is too large to place a ring around precisely")]
    LongitudeOutOfRange(f64),

    #[error("ring vertex {index} is not finite")]
    DegenerateVertex { index: usize },
}

/// Build a closed, counter-clockwise buffer ring around `(lon, lat)`.
///
/// Longitudes are unwrapped vertex to vertex, starting from the center's
/// own longitude, so a ring that crosses the antimeridian stays contiguous
/// (values may fall outside ±180). A ring that encloses a pole spans a full
/// turn of longitude and is closed along that pole's parallel, giving a cap.
pub fn buffer_point(lon: f64, lat: f64, spec: &BufferSpec) -> Result<Polygon<f64>, BufferError> {
    spec.validate()?;

    if !lon.is_finite() || !lat.is_finite() {
        return Err(BufferError::InvalidCenter { lon, lat });
    }
    if lat.abs() > 90.0 {
        return Err(BufferError::LatitudeOutOfRange(lat));
    }

    // Walk the ring around the equivalent center in [-180, 180), then move
    // it back by whole turns.
    let turns = (lon + 180.0).div_euclid(360.0) * 360.0;
    let base_lon = lon - turns;
    if !base_lon.is_finite() {
        return Err(BufferError::LongitudeOutOfRange(lon));
    }

    let center = Point::new(base_lon, lat);
    let step = 360.0 / spec.segments as f64;
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(spec.segments + 4);
    let mut previous = base_lon;

    for index in 0..spec.segments {
        // Decreasing bearings walk the ring counter-clockwise.
        let bearing = (360.0 - index as f64 * step) % 360.0;

        let (x, y) = match spec.model {
            BufferModel::Geodesic => {
                let p = center.geodesic_destination(bearing, spec.radius_km * 1000.0);
                (p.x(), p.y())
            }
            BufferModel::Spherical => {
                destination_point(base_lon, lat, bearing.to_radians(), spec.radius_km)
            }
        };

        if !x.is_finite() || !y.is_finite() {
            return Err(BufferError::DegenerateVertex { index });
        }

        let x = unwrap_longitude(x, previous);
        previous = x;
        coords.push(Coord { x, y });
    }

    let first = coords[0];
    let closing_x = unwrap_longitude(first.x, previous);
    if (closing_x - first.x).abs() > 180.0 {
        let pole = 90.0_f64.copysign(lat);
        coords.push(Coord { x: closing_x, y: first.y });
        coords.push(Coord { x: closing_x, y: pole });
        coords.push(Coord { x: first.x, y: pole });
    }
    coords.push(first);

    if turns != 0.0 {
        for c in coords.iter_mut() {
            let shifted = c.x + turns;
            if (shifted - turns - c.x).abs() > MAX_SHIFT_ERROR_DEG {
                return Err(BufferError::LongitudeOutOfRange(lon));
            }
            c.x = shifted;
        }
    }

    let mut ring = LineString::from(coords);
    ring.make_ccw_winding();

    Ok(Polygon::new(ring, vec![]))
}

/// Largest rounding error tolerated when shifting a ring by whole turns.
const MAX_SHIFT_ERROR_DEG: f64 = 1e-9;

/// Shift `lon` by whole turns so it lies within 180° of `reference`.
fn unwrap_longitude(lon: f64, reference: f64) -> f64 {
    reference + (lon - reference + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_is_closed_with_expected_vertex_count() {
        let polygon = buffer_point(121.25, 14.17, &BufferSpec::default()).unwrap();
        let ring = polygon.exterior();
        assert_eq!(ring.0.len(), DEFAULT_SEGMENTS + 1);
        assert_eq!(ring.0.first(), ring.0.last());
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn test_first_vertex_is_due_north() {
        let polygon = buffer_point(0.0, 0.0, &BufferSpec::default()).unwrap();
        let first = polygon.exterior().0[0];
        assert!(first.x.abs() < 1e-9);
        assert!(first.y > 0.17 && first.y < 0.19, "lat was {}", first.y);
    }

    #[test]
    fn test_ring_is_counter_clockwise() {
        let polygon = buffer_point(10.0, 45.0, &BufferSpec::default()).unwrap();
        let coords = &polygon.exterior().0;
        // Shoelace: positive signed area means counter-clockwise.
        let area: f64 = coords
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum();
        assert!(area > 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let spec = BufferSpec::default();
        assert_eq!(
            buffer_point(0.0, 91.0, &spec).unwrap_err(),
            BufferError::LatitudeOutOfRange(91.0)
        );
        assert!(matches!(
            buffer_point(f64::NAN, 0.0, &spec),
            Err(BufferError::InvalidCenter { .. })
        ));

        let bad_radius = BufferSpec {
            radius_km: 0.0,
            ..spec
        };
        assert_eq!(
            buffer_point(0.0, 0.0, &bad_radius).unwrap_err(),
            BufferError::InvalidRadius(0.0)
        );

        let bad_segments = BufferSpec {
            segments: 2,
            ..spec
        };
        assert_eq!(
            buffer_point(0.0, 0.0, &bad_segments).unwrap_err(),
            BufferError::TooFewSegments(2)
        );
    }

    #[test]
    fn test_antimeridian_ring_stays_contiguous() {
        let polygon = buffer_point(179.9, 0.0, &BufferSpec::default()).unwrap();
        for c in polygon.exterior().coords() {
            assert!((c.x - 179.9).abs() < 1.0, "lon {} jumped across the globe", c.x);
        }
    }

    #[test]
    fn test_unwrap_longitude() {
        assert_eq!(unwrap_longitude(-179.0, 179.0), 181.0);
        assert_eq!(unwrap_longitude(179.0, -179.0), -181.0);
        assert_eq!(unwrap_longitude(10.0, 12.0), 10.0);
    }

    #[test]
    fn test_longitude_beyond_one_turn_shifts_ring() {
        let spec = BufferSpec::default();
        let near = buffer_point(180.0, 10.0, &spec).unwrap();
        let far = buffer_point(540.0, 10.0, &spec).unwrap();

        for (a, b) in near.exterior().coords().zip(far.exterior().coords()) {
            assert!((b.x - a.x - 360.0).abs() < 1e-9);
            assert_eq!(a.y, b.y);
        }
    }

    #[test]
    fn test_huge_longitude_fails_fast() {
        let spec = BufferSpec::default();
        for lon in [1e18, -1e18, 1e12] {
            assert_eq!(
                buffer_point(lon, 10.0, &spec).unwrap_err(),
                BufferError::LongitudeOutOfRange(lon)
            );
        }
    }

    fn pole_vertices(polygon: &Polygon<f64>, pole: f64) -> usize {
        polygon.exterior().coords().filter(|c| c.y == pole).count()
    }

    fn lon_span(polygon: &Polygon<f64>) -> f64 {
        let xs: Vec<f64> = polygon.exterior().coords().map(|c| c.x).collect();
        xs.iter().cloned().fold(f64::MIN, f64::max) - xs.iter().cloned().fold(f64::MAX, f64::min)
    }

    #[test]
    fn test_ring_around_north_pole_is_a_cap() {
        let spec = BufferSpec::default();
        for lat in [89.9, 90.0] {
            let polygon = buffer_point(30.0, lat, &spec).unwrap();
            let ring = polygon.exterior();

            assert_eq!(ring.0.first(), ring.0.last());
            assert_eq!(ring.0.len(), DEFAULT_SEGMENTS + 4);
            assert_eq!(pole_vertices(&polygon, 90.0), 2);
            assert!((lon_span(&polygon) - 360.0).abs() < 1e-9, "lat {}", lat);
            assert!(ring.is_ccw());
        }
    }

    #[test]
    fn test_ring_around_south_pole_is_a_cap() {
        let spherical = BufferSpec {
            model: BufferModel::Spherical,
            ..BufferSpec::default()
        };
        for spec in [BufferSpec::default(), spherical] {
            let polygon = buffer_point(-60.0, -89.95, &spec).unwrap();
            assert_eq!(pole_vertices(&polygon, -90.0), 2);
            assert!((lon_span(&polygon) - 360.0).abs() < 1e-9);
            assert!(polygon.exterior().is_ccw());
        }
    }

    #[test]
    fn test_ring_near_but_clear_of_pole_is_not_capped() {
        // About 33 km from the pole, so a 20 km ring does not reach it.
        let polygon = buffer_point(30.0, 89.7, &BufferSpec::default()).unwrap();
        assert_eq!(polygon.exterior().0.len(), DEFAULT_SEGMENTS + 1);
        assert_eq!(pole_vertices(&polygon, 90.0), 0);
        assert!(lon_span(&polygon) < 180.0);
    }

    #[test]
    fn test_spec_deserializes_with_defaults() {
        let spec: BufferSpec = serde_json::from_str(r#"{"model": "spherical"}"#).unwrap();
        assert_eq!(spec.model, BufferModel::Spherical);
        assert_eq!(spec.radius_km, DEFAULT_RADIUS_KM);
        assert_eq!(spec.segments, DEFAULT_SEGMENTS);
    }
}
