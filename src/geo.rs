//! Great-circle distance between two coordinates.

use crate::Coordinate;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `a` and `b` in kilometers.
///
/// Symmetric in its arguments and zero when both points coincide. Inputs are
/// not range checked; [`Coordinate::new`] rejects bad values upstream.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new_unchecked(latitude, longitude)
    }

    #[test]
    fn test_same_point_is_zero() {
        let lowestoft = coord(52.4767, 1.7514);
        assert!(distance_km(lowestoft, lowestoft).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (coord(52.4767, 1.7514), coord(51.5074, -0.1278)),
            (coord(-33.86, 151.21), coord(40.71, -74.0)),
            (coord(0.0, 179.9), coord(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            let ab = distance_km(a, b);
            let ba = distance_km(b, a);
            assert!((ab - ba).abs() < 1e-9, "{ab} != {ba}");
        }
    }

    #[test]
    fn test_known_distances() {
        // One degree of longitude on the equator
        let d = distance_km(coord(0.0, 0.0), coord(0.0, 1.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");

        // Antipodes are half the circumference apart
        let d = distance_km(coord(0.0, 0.0), coord(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-3);

        // Lowestoft to central London, roughly 168 km
        let d = distance_km(coord(52.4767, 1.7514), coord(51.5074, -0.1278));
        assert!((165.0..171.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_distance_grows_with_separation() {
        let origin = coord(50.0, 0.0);
        let mut last = 0.0;
        for step in 1..=18 {
            let d = distance_km(origin, coord(50.0 - step as f64 * 5.0, 0.0));
            assert!(d > last, "distance should grow at step {step}");
            last = d;
        }
    }
}
