use crate::geo::within_radius;
use crate::models::{CalmZone, Location, RoutePoint, RouteSuggestion, StressZone};
use crate::routing::config::RouteConfig;

/// Quick route preview between two points, biased by nearby known zones.
///
/// Only zones within `nearby_radius_m` of *both* endpoints are considered.
/// The best-scoring nearby calm zone becomes a single detour waypoint and
/// lifts the score; each nearby stress zone applies a flat penalty (flat per
/// zone, unlike the full scorer's per-waypoint-hit accounting). Every
/// considered zone id is recorded even when it did not change the path.
pub fn suggest_route(
    start: &Location,
    end: &Location,
    calm_zones: &[CalmZone],
    stress_zones: &[StressZone],
    config: &RouteConfig,
) -> RouteSuggestion {
    let near_both = |center: &Location| {
        within_radius(center, start.latitude, start.longitude, config.nearby_radius_m)
            && within_radius(center, end.latitude, end.longitude, config.nearby_radius_m)
    };

    let nearby_calm: Vec<&CalmZone> = calm_zones.iter().filter(|z| near_both(&z.center)).collect();
    let nearby_stress: Vec<&StressZone> =
        stress_zones.iter().filter(|z| near_both(&z.center)).collect();

    let mut score = config.base_score;
    let mut points = vec![RoutePoint::from(start)];

    let best_calm = nearby_calm.iter().max_by(|a, b| {
        a.calm_score
            .partial_cmp(&b.calm_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(zone) = best_calm {
        points.push(RoutePoint::from(&zone.center));
        score += config.suggest_calm_weight * zone.calm_score;
    }
    points.push(RoutePoint::from(end));

    score -= config.suggest_stress_penalty * nearby_stress.len() as f64;

    let distance_m: f64 = points.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
    let estimated_duration_mins = distance_m / 1_000.0 * config.pace_mins_per_km;

    RouteSuggestion {
        points,
        distance_m,
        estimated_duration_mins,
        score: score.clamp(0.0, 1.0),
        considered_calm_zone_ids: nearby_calm.iter().map(|z| z.id.clone()).collect(),
        considered_stress_zone_ids: nearby_stress.iter().map(|z| z.id.clone()).collect(),
    }
}
