pub mod config;
pub mod fallback;
pub mod scoring;
pub mod suggest;

use anyhow::Result;
use log::warn;
use rand::Rng;

use crate::models::{CalmZone, Location, OptimizedRoute, RoutePoint, RouteSegment, StressZone};

pub use config::RouteConfig;
pub use fallback::fallback_route;
pub use scoring::{score_route, RouteScore};
pub use suggest::suggest_route;

/// Path geometry returned by an external routing collaborator.
#[derive(Debug, Clone)]
pub struct ExternalRoute {
    /// Ordered coordinates from start to end.
    pub points: Vec<RoutePoint>,
    pub total_distance_m: f64,
    pub total_duration_secs: f64,
    /// Turn-by-turn text, one entry per leg. May be shorter than the leg
    /// count; missing entries are synthesized.
    pub instructions: Vec<String>,
}

/// Optional upstream routing service. Implementations may fail freely; the
/// caller always falls back to the synthesizer.
pub trait RouteProvider {
    fn plan_route(&self, start: &Location, end: &Location) -> Result<ExternalRoute>;
}

/// Plan a route through the external provider when one is available, scoring
/// its geometry against the zone stores; on any failure (or no provider),
/// substitute the fallback synthesizer. Never returns an error to the
/// caller.
pub fn plan_or_fallback<R: Rng>(
    provider: Option<&dyn RouteProvider>,
    start: &Location,
    end: &Location,
    calm_zones: &[CalmZone],
    stress_zones: &[StressZone],
    config: &RouteConfig,
    rng: &mut R,
) -> OptimizedRoute {
    if let Some(provider) = provider {
        match provider.plan_route(start, end) {
            Ok(external) if external.points.len() >= 2 => {
                return adopt_external_route(external, calm_zones, stress_zones, config);
            }
            Ok(_) => {
                warn!("external routing returned degenerate geometry; using fallback route");
            }
            Err(err) => {
                warn!("external routing failed ({err:#}); using fallback route");
            }
        }
    }

    fallback_route(start, end, calm_zones, stress_zones, config, rng)
}

fn adopt_external_route(
    external: ExternalRoute,
    calm_zones: &[CalmZone],
    stress_zones: &[StressZone],
    config: &RouteConfig,
) -> OptimizedRoute {
    let verdict = score_route(&external.points, calm_zones, stress_zones, config);

    let segments: Vec<RouteSegment> = external
        .points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (from, to) = (pair[0], pair[1]);
            let distance_m = from.distance_to(&to);
            let instruction = external
                .instructions
                .get(i)
                .cloned()
                .unwrap_or_else(|| fallback::segment_instruction(i, &from, &to, distance_m));
            RouteSegment {
                start: from,
                end: to,
                distance_m,
                duration_secs: distance_m / config.walking_speed_mps,
                instruction,
            }
        })
        .collect();

    OptimizedRoute {
        points: external.points,
        segments,
        total_distance_m: external.total_distance_m,
        total_duration_secs: external.total_duration_secs,
        calm_score: verdict.score,
        avoid_zone_ids: verdict.avoid_zone_ids,
        prefer_zone_ids: verdict.prefer_zone_ids,
    }
}
