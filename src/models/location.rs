use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single geolocation fix as delivered by the acquisition collaborator.
/// Immutable once created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported horizontal accuracy in meters, when the device provides one.
    pub accuracy: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
            timestamp,
        }
    }

    /// Great-circle distance to another location, in meters.
    pub fn distance_to(&self, other: &Location) -> f64 {
        crate::geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}
