//! Walk-end pipeline: cluster the session's entries, fold them into the
//! zone stores and attach the summary, in one pass the host calls when a
//! walk finishes.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;

use crate::insights::{summarize_walk, InsightConfig};
use crate::models::{CalmZone, StressZone, WalkSession};
use crate::zones::{cluster_entries, update_zones, ZoneConfig};

/// Everything produced by completing one walk. The session and both zone
/// collections must be persisted together; the store writes them in a
/// single save so a crash cannot leave them divergent.
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    pub session: WalkSession,
    pub calm_zones: Vec<CalmZone>,
    pub stress_zones: Vec<StressZone>,
}

/// Complete a walk: stamp the end time, derive zone updates from the
/// session's entries and synthesize the summary.
///
/// Pure over its inputs aside from logging; the caller owns persistence of
/// the returned collections.
pub fn complete_walk(
    mut session: WalkSession,
    calm_zones: &[CalmZone],
    stress_zones: &[StressZone],
    ended_at: DateTime<Utc>,
    zone_config: &ZoneConfig,
    insight_config: &InsightConfig,
) -> Result<WalkOutcome> {
    session.end_at(ended_at);

    let clusters = cluster_entries(&session.mood_entries, zone_config.cluster_radius_m);
    let update = update_zones(&clusters, calm_zones, stress_zones, zone_config)?;

    session.summary = Some(summarize_walk(&session, insight_config));

    info!(
        "walk {} completed: {} entries, {} clusters, {} calm zones, {} stress zones",
        session.id,
        session.entry_count(),
        clusters.len(),
        update.calm_zones.len(),
        update.stress_zones.len()
    );

    Ok(WalkOutcome {
        session,
        calm_zones: update.calm_zones,
        stress_zones: update.stress_zones,
    })
}
