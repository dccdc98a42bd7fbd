use anyhow::Result;

use crate::geo::within_radius;
use crate::models::{CalmZone, StressZone};
use crate::zones::clustering::Cluster;
use crate::zones::config::ZoneConfig;

/// Updated zone collections produced by one classification pass.
/// Derived copies of the input stores; the caller persists them.
#[derive(Debug, Clone)]
pub struct ZoneUpdate {
    pub calm_zones: Vec<CalmZone>,
    pub stress_zones: Vec<StressZone>,
}

/// Classify one session's clusters and fold them into the zone stores.
///
/// A cluster with at least `min_cluster_size` members becomes a stress-zone
/// candidate when its stress rate clears the threshold, otherwise a
/// calm-zone candidate when its calm rate does, otherwise it is ignored.
/// Candidates merge into an existing zone of the same kind whose center lies
/// within `merge_radius_m`, or create a new zone.
///
/// Existing zone radii are never adjusted; merging is purely center-distance
/// based. Malformed input zone records are a validation error, not a skip.
pub fn update_zones(
    clusters: &[Cluster],
    calm_zones: &[CalmZone],
    stress_zones: &[StressZone],
    config: &ZoneConfig,
) -> Result<ZoneUpdate> {
    for zone in calm_zones {
        zone.validate()?;
    }
    for zone in stress_zones {
        zone.validate()?;
    }

    let mut updated_calm = calm_zones.to_vec();
    let mut updated_stress = stress_zones.to_vec();

    for cluster in clusters {
        if cluster.size() < config.min_cluster_size {
            continue;
        }

        // Stress takes priority; the two rates cannot both exceed the
        // threshold since they are fractions of the same total.
        if cluster.stress_rate() > config.rate_threshold {
            apply_stress_cluster(cluster, &mut updated_stress, config);
        } else if cluster.calm_rate() > config.rate_threshold {
            apply_calm_cluster(cluster, &mut updated_calm, config);
        }
    }

    Ok(ZoneUpdate {
        calm_zones: updated_calm,
        stress_zones: updated_stress,
    })
}

fn apply_calm_cluster(cluster: &Cluster, zones: &mut Vec<CalmZone>, config: &ZoneConfig) {
    let Some(cluster_latest) = cluster.latest_timestamp() else {
        return;
    };

    let existing = zones.iter_mut().find(|z| {
        within_radius(
            &z.center,
            cluster.center.latitude,
            cluster.center.longitude,
            config.merge_radius_m,
        )
    });

    match existing {
        Some(zone) => {
            zone.visit_count += cluster.size() as u32;
            zone.calm_score = (zone.calm_score + config.score_increment).min(1.0);
            zone.last_visited = zone.last_visited.max(cluster_latest);
        }
        None => {
            zones.push(CalmZone::new(
                cluster.center,
                config.zone_radius_m,
                cluster.calm_rate(),
                cluster.size() as u32,
                cluster_latest,
            ));
        }
    }
}

fn apply_stress_cluster(cluster: &Cluster, zones: &mut Vec<StressZone>, config: &ZoneConfig) {
    let Some(cluster_latest) = cluster.latest_timestamp() else {
        return;
    };

    let existing = zones.iter_mut().find(|z| {
        within_radius(
            &z.center,
            cluster.center.latitude,
            cluster.center.longitude,
            config.merge_radius_m,
        )
    });

    match existing {
        Some(zone) => {
            zone.stress_count += cluster.size() as u32;
            zone.stress_score = (zone.stress_score + config.score_increment).min(1.0);
            zone.last_stressed = zone.last_stressed.max(cluster_latest);
        }
        None => {
            zones.push(StressZone::new(
                cluster.center,
                config.zone_radius_m,
                cluster.stress_rate(),
                cluster.size() as u32,
                cluster_latest,
            ));
        }
    }
}
