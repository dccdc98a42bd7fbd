use anyhow::{ensure, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Location;

/// A persisted circular region where the walker has repeatedly felt calm.
///
/// Zones are mutable aggregates owned by the zone store. Identity for lookup
/// is the `id`; identity for merging is spatial (center within the merge
/// radius), so two zones with different ids can describe overlapping ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalmZone {
    pub id: String,
    pub center: Location,
    /// Radius in meters, always > 0.
    pub radius: f64,
    /// Saturating confidence in [0, 1]; incremented on repeat evidence.
    pub calm_score: f64,
    /// Total mood entries ever merged into this zone. Monotonic.
    pub visit_count: u32,
    /// Latest entry timestamp that ever contributed to this zone.
    pub last_visited: DateTime<Utc>,
}

impl CalmZone {
    pub fn new(
        center: Location,
        radius: f64,
        calm_score: f64,
        visit_count: u32,
        last_visited: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            center,
            radius,
            calm_score,
            visit_count,
            last_visited,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_zone_record("calm zone", &self.id, &self.center, self.radius, self.calm_score)
    }
}

/// The stressful counterpart of [`CalmZone`]; same shape, same rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressZone {
    pub id: String,
    pub center: Location,
    pub radius: f64,
    pub stress_score: f64,
    pub stress_count: u32,
    pub last_stressed: DateTime<Utc>,
}

impl StressZone {
    pub fn new(
        center: Location,
        radius: f64,
        stress_score: f64,
        stress_count: u32,
        last_stressed: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            center,
            radius,
            stress_score,
            stress_count,
            last_stressed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_zone_record(
            "stress zone",
            &self.id,
            &self.center,
            self.radius,
            self.stress_score,
        )
    }
}

fn validate_zone_record(
    kind: &str,
    id: &str,
    center: &Location,
    radius: f64,
    score: f64,
) -> Result<()> {
    ensure!(!id.is_empty(), "{kind} has an empty id");
    ensure!(
        center.latitude.is_finite() && center.longitude.is_finite(),
        "{kind} {id} has a non-finite center"
    );
    ensure!(radius > 0.0, "{kind} {id} has radius {radius}, expected > 0");
    ensure!(
        (0.0..=1.0).contains(&score),
        "{kind} {id} has score {score}, expected within [0, 1]"
    );
    Ok(())
}
