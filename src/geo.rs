//! Geodesic primitives shared by clustering, zone merging and routing.

use crate::models::Location;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Eight compass sectors of 45°, clockwise from north.
const COMPASS_SECTORS: [&str; 8] = [
    "north",
    "northeast",
    "east",
    "southeast",
    "south",
    "southwest",
    "west",
    "northwest",
];

/// Great-circle distance between two coordinates in meters, via the
/// haversine formula.
///
/// Total function: identical points give exactly 0 and the haversine term is
/// clamped before `asin` so antipodal points stay finite.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let sin_d_phi = (d_phi / 2.0).sin();
    let sin_d_lambda = (d_lambda / 2.0).sin();

    let h = sin_d_phi * sin_d_phi + phi1.cos() * phi2.cos() * sin_d_lambda * sin_d_lambda;
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// True iff `(lat, lon)` is at most `radius_m` meters from `center`
/// (closed boundary).
pub fn within_radius(center: &Location, lat: f64, lon: f64, radius_m: f64) -> bool {
    haversine_distance(center.latitude, center.longitude, lat, lon) <= radius_m
}

/// Cardinal/intercardinal direction of travel from one point to the next.
///
/// Uses the flat `atan2(Δlon, Δlat)` bearing, which is accurate enough for
/// the short segments routes are built from.
pub fn compass_direction(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> &'static str {
    let bearing_deg = (to_lon - from_lon).atan2(to_lat - from_lat).to_degrees();
    let normalized = (bearing_deg + 360.0) % 360.0;
    let sector = ((normalized + 22.5) / 45.0).floor() as usize % 8;
    COMPASS_SECTORS[sector]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn loc(lat: f64, lon: f64) -> Location {
        Location::new(lat, lon, Utc.timestamp_millis_opt(0).unwrap())
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(haversine_distance(45.5017, -73.5673, 45.5017, -73.5673), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_distance(45.5017, -73.5673, 45.5088, -73.5540);
        let ba = haversine_distance(45.5088, -73.5540, 45.5017, -73.5673);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn known_distance_is_close() {
        // Paris to London is roughly 344 km.
        let d = haversine_distance(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((d - 344_000.0).abs() < 5_000.0, "got {d}");
    }

    #[test]
    fn antipodal_points_stay_finite() {
        let d = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        // Half the Earth's circumference, within a kilometer.
        assert!((d - std::f64::consts::PI * 6_371_000.0).abs() < 1_000.0);
    }

    #[test]
    fn triangle_inequality_roughly_holds() {
        let a = (45.50, -73.57);
        let b = (45.51, -73.55);
        let c = (45.49, -73.53);
        let ab = haversine_distance(a.0, a.1, b.0, b.1);
        let bc = haversine_distance(b.0, b.1, c.0, c.1);
        let ac = haversine_distance(a.0, a.1, c.0, c.1);
        assert!(ac <= ab + bc + 1e-6);
    }

    #[test]
    fn within_radius_boundary_is_closed() {
        let center = loc(45.5, -73.6);
        let d = haversine_distance(45.5, -73.6, 45.5005, -73.6);
        assert!(within_radius(&center, 45.5005, -73.6, d));
        assert!(!within_radius(&center, 45.5005, -73.6, d - 0.01));
    }

    #[test]
    fn compass_sectors() {
        assert_eq!(compass_direction(45.0, -73.0, 45.1, -73.0), "north");
        assert_eq!(compass_direction(45.0, -73.0, 45.0, -72.9), "east");
        assert_eq!(compass_direction(45.0, -73.0, 44.9, -73.0), "south");
        assert_eq!(compass_direction(45.0, -73.0, 45.0, -73.1), "west");
        assert_eq!(compass_direction(45.0, -73.0, 45.1, -72.9), "northeast");
        assert_eq!(compass_direction(45.0, -73.0, 44.9, -73.1), "southwest");
    }
}
