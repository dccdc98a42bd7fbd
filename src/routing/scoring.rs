use std::collections::HashSet;

use crate::geo::within_radius;
use crate::models::{CalmZone, RoutePoint, StressZone};
use crate::routing::config::RouteConfig;

/// Calmness verdict for one waypoint sequence.
#[derive(Debug, Clone)]
pub struct RouteScore {
    /// Clamped to [0, 1]; 0.5 means no zone touched the route.
    pub score: f64,
    /// Distinct stress zones the route passes through.
    pub avoid_zone_ids: Vec<String>,
    /// Distinct calm zones the route passes through.
    pub prefer_zone_ids: Vec<String>,
}

/// Score a waypoint sequence against the zone stores.
///
/// Every (waypoint, zone) containment hit moves the score: stress zones
/// subtract, calm zones add. The adjustment is per hit, not per distinct
/// zone, so a route that threads the same stress zone repeatedly keeps
/// paying for it; the zone's id is still recorded only once. The clamp is
/// applied once at the end.
pub fn score_route(
    points: &[RoutePoint],
    calm_zones: &[CalmZone],
    stress_zones: &[StressZone],
    config: &RouteConfig,
) -> RouteScore {
    let mut score = config.base_score;
    let mut avoid_seen = HashSet::new();
    let mut prefer_seen = HashSet::new();
    let mut avoid_zone_ids = Vec::new();
    let mut prefer_zone_ids = Vec::new();

    for point in points {
        for zone in stress_zones {
            if within_radius(&zone.center, point.latitude, point.longitude, zone.radius) {
                score -= config.stress_penalty;
                if avoid_seen.insert(zone.id.clone()) {
                    avoid_zone_ids.push(zone.id.clone());
                }
            }
        }
        for zone in calm_zones {
            if within_radius(&zone.center, point.latitude, point.longitude, zone.radius) {
                score += config.calm_reward;
                if prefer_seen.insert(zone.id.clone()) {
                    prefer_zone_ids.push(zone.id.clone());
                }
            }
        }
    }

    RouteScore {
        score: score.clamp(0.0, 1.0),
        avoid_zone_ids,
        prefer_zone_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::{TimeZone, Utc};

    const LAT_M: f64 = 1.0 / 111_320.0;

    fn center(lat: f64, lon: f64) -> Location {
        Location::new(lat, lon, Utc.timestamp_millis_opt(0).unwrap())
    }

    fn calm_zone(lat: f64, lon: f64, radius: f64) -> CalmZone {
        CalmZone::new(center(lat, lon), radius, 0.8, 5, center(lat, lon).timestamp)
    }

    fn stress_zone(lat: f64, lon: f64, radius: f64) -> StressZone {
        StressZone::new(center(lat, lon), radius, 0.8, 5, center(lat, lon).timestamp)
    }

    #[test]
    fn untouched_route_scores_base() {
        let points = vec![RoutePoint::new(45.5, -73.6), RoutePoint::new(45.51, -73.6)];
        let result = score_route(&points, &[], &[], &RouteConfig::default());
        assert_eq!(result.score, 0.5);
        assert!(result.avoid_zone_ids.is_empty());
        assert!(result.prefer_zone_ids.is_empty());
    }

    #[test]
    fn single_stress_hit_drops_to_point_four() {
        let points = vec![RoutePoint::new(45.5, -73.6)];
        let zones = vec![stress_zone(45.5, -73.6, 30.0)];
        let result = score_route(&points, &[], &zones, &RouteConfig::default());
        assert!((result.score - 0.4).abs() < 1e-12);
        assert_eq!(result.avoid_zone_ids.len(), 1);
    }

    #[test]
    fn calm_hit_adds_half_as_much() {
        let points = vec![RoutePoint::new(45.5, -73.6)];
        let zones = vec![calm_zone(45.5, -73.6, 30.0)];
        let result = score_route(&points, &zones, &[], &RouteConfig::default());
        assert!((result.score - 0.55).abs() < 1e-12);
    }

    #[test]
    fn repeat_hits_accumulate_but_ids_dedupe() {
        // Three waypoints all inside the same stress zone.
        let points = vec![
            RoutePoint::new(45.5, -73.6),
            RoutePoint::new(45.5 + 5.0 * LAT_M, -73.6),
            RoutePoint::new(45.5 + 10.0 * LAT_M, -73.6),
        ];
        let zones = vec![stress_zone(45.5, -73.6, 30.0)];
        let result = score_route(&points, &[], &zones, &RouteConfig::default());
        assert!((result.score - 0.2).abs() < 1e-12);
        assert_eq!(result.avoid_zone_ids.len(), 1);
    }

    #[test]
    fn score_clamps_at_zero_and_one() {
        let points: Vec<RoutePoint> = (0..20)
            .map(|i| RoutePoint::new(45.5 + i as f64 * LAT_M, -73.6))
            .collect();

        let stress = vec![stress_zone(45.5, -73.6, 100.0)];
        let low = score_route(&points, &[], &stress, &RouteConfig::default());
        assert_eq!(low.score, 0.0);

        let calm: Vec<CalmZone> = (0..3).map(|_| calm_zone(45.5, -73.6, 100.0)).collect();
        let high = score_route(&points, &calm, &[], &RouteConfig::default());
        assert_eq!(high.score, 1.0);
    }

    #[test]
    fn zone_boundary_is_inclusive() {
        let d = crate::geo::haversine_distance(45.5, -73.6, 45.5 + 30.0 * LAT_M, -73.6);
        let points = vec![RoutePoint::new(45.5 + 30.0 * LAT_M, -73.6)];
        let zones = vec![stress_zone(45.5, -73.6, d)];
        let result = score_route(&points, &[], &zones, &RouteConfig::default());
        assert!((result.score - 0.4).abs() < 1e-12);
    }
}
