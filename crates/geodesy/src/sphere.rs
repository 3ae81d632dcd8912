//! Great-circle math on a spherical Earth.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
pub fn haversine_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Point reached by travelling `distance_km` along `bearing_rad` from (lon, lat).
///
/// Returns `(lon, lat)` in degrees. Longitude is not normalized.
pub fn destination_point(lon: f64, lat: f64, bearing_rad: f64, distance_km: f64) -> (f64, f64) {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();

    let angular_dist = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat_rad.sin() * angular_dist.cos()
        + lat_rad.cos() * angular_dist.sin() * bearing_rad.cos())
    .asin();

    let lon2 = lon_rad
        + (bearing_rad.sin() * angular_dist.sin() * lat_rad.cos())
            .atan2(angular_dist.cos() - lat_rad.sin() * lat2.sin());

    (lon2.to_degrees(), lat2.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_haversine_distance() {
        // London to Paris is roughly 344 km
        let distance = haversine_distance(-0.1276, 51.5074, 2.3522, 48.8566);
        assert!((distance - 344.0).abs() < 5.0, "Distance was {} km", distance);
    }

    #[test]
    fn test_haversine_distance_same_point() {
        assert!(haversine_distance(121.25, 14.17, 121.25, 14.17).abs() < 1e-9);
    }

    #[test]
    fn test_destination_due_north() {
        let (lon, lat) = destination_point(0.0, 0.0, 0.0, 111.195);
        assert!(lon.abs() < 1e-9);
        assert!((lat - 1.0).abs() < 1e-3, "lat was {}", lat);
    }

    #[test]
    fn test_destination_round_trips_distance() {
        let (lon, lat) = destination_point(121.25, 14.17, FRAC_PI_2, 20.0);
        let d = haversine_distance(121.25, 14.17, lon, lat);
        assert!((d - 20.0).abs() < 1e-6, "distance was {}", d);
        assert!(lon > 121.25);
    }
}
