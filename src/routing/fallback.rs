use rand::Rng;

use crate::geo::compass_direction;
use crate::models::{CalmZone, Location, OptimizedRoute, RoutePoint, RouteSegment, StressZone};
use crate::routing::config::RouteConfig;
use crate::routing::scoring::score_route;

/// Synthesize a walkable route when no external geometry is available.
///
/// Interpolates between the endpoints in roughly `step_length_m` hops
/// (clamped to `min_steps..=max_steps` segments) and jitters the interior
/// waypoints slightly so the synthetic path does not render as a ruler line.
/// The rng is injected so a seeded generator reproduces the exact route.
///
/// Never fails; this is the guaranteed floor under any external routing
/// collaborator.
pub fn fallback_route<R: Rng>(
    start: &Location,
    end: &Location,
    calm_zones: &[CalmZone],
    stress_zones: &[StressZone],
    config: &RouteConfig,
    rng: &mut R,
) -> OptimizedRoute {
    let straight_distance = start.distance_to(end);
    let steps = ((straight_distance / config.step_length_m).floor() as usize)
        .clamp(config.min_steps, config.max_steps);

    let mut points = Vec::with_capacity(steps + 1);
    points.push(RoutePoint::from(start));
    for i in 1..steps {
        let t = i as f64 / steps as f64;
        let lat = start.latitude
            + (end.latitude - start.latitude) * t
            + rng.gen_range(-config.jitter_deg..=config.jitter_deg);
        let lon = start.longitude
            + (end.longitude - start.longitude) * t
            + rng.gen_range(-config.jitter_deg..=config.jitter_deg);
        points.push(RoutePoint::new(lat, lon));
    }
    points.push(RoutePoint::from(end));

    let segments = build_segments(&points, config);
    let total_distance_m: f64 = segments.iter().map(|s| s.distance_m).sum();
    let total_duration_secs: f64 = segments.iter().map(|s| s.duration_secs).sum();

    let verdict = score_route(&points, calm_zones, stress_zones, config);

    OptimizedRoute {
        points,
        segments,
        total_distance_m,
        total_duration_secs,
        calm_score: verdict.score,
        avoid_zone_ids: verdict.avoid_zone_ids,
        prefer_zone_ids: verdict.prefer_zone_ids,
    }
}

fn build_segments(points: &[RoutePoint], config: &RouteConfig) -> Vec<RouteSegment> {
    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (from, to) = (pair[0], pair[1]);
            let distance_m = from.distance_to(&to);
            RouteSegment {
                start: from,
                end: to,
                distance_m,
                duration_secs: distance_m / config.walking_speed_mps,
                instruction: segment_instruction(i, &from, &to, distance_m),
            }
        })
        .collect()
}

pub(crate) fn segment_instruction(
    index: usize,
    from: &RoutePoint,
    to: &RoutePoint,
    distance_m: f64,
) -> String {
    let direction = compass_direction(from.latitude, from.longitude, to.latitude, to.longitude);
    let meters = distance_m.round() as i64;

    if index == 0 {
        format!("Start walking {direction} for {meters} m")
    } else if distance_m < 30.0 {
        format!("Continue straight for {meters} m")
    } else if distance_m < 100.0 {
        format!("Walk {direction} for {meters} m")
    } else {
        format!("Head {direction} for {meters} m")
    }
}
