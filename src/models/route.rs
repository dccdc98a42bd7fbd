use serde::{Deserialize, Serialize};

use crate::models::Location;

/// One coordinate in an ordered route path. Unlike [`Location`] this is not a
/// sensed sample, so it carries no timestamp or accuracy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl RoutePoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_to(&self, other: &RoutePoint) -> f64 {
        crate::geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl From<&Location> for RoutePoint {
    fn from(location: &Location) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    pub start: RoutePoint,
    pub end: RoutePoint,
    pub distance_m: f64,
    /// Walking time for this segment in seconds.
    pub duration_secs: f64,
    pub instruction: String,
}

/// A scored walking route, either converted from an external routing
/// collaborator's geometry or synthesized by the fallback generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    pub points: Vec<RoutePoint>,
    pub segments: Vec<RouteSegment>,
    pub total_distance_m: f64,
    pub total_duration_secs: f64,
    /// Calmness score in [0, 1]; 0.5 is neutral.
    pub calm_score: f64,
    /// Distinct stress zones the route passes through.
    pub avoid_zone_ids: Vec<String>,
    /// Distinct calm zones the route passes through.
    pub prefer_zone_ids: Vec<String>,
}

/// Lightweight route preview from the simple suggestion generator.
/// Records every zone it looked at, whether or not it changed the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSuggestion {
    pub points: Vec<RoutePoint>,
    pub distance_m: f64,
    pub estimated_duration_mins: f64,
    pub score: f64,
    pub considered_calm_zone_ids: Vec<String>,
    pub considered_stress_zone_ids: Vec<String>,
}
