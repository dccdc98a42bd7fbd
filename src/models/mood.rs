use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Location;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    Calm,
    Neutral,
    Stressed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Neutral => "neutral",
            Mood::Stressed => "stressed",
        }
    }
}

/// One mood check-in recorded during a walk: where the walker was, how they
/// felt, and how loud the surroundings were. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub location: Location,
    pub mood: Mood,
    /// Ambient noise level in decibels at the moment of the check-in.
    pub noise_level: f64,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(location: Location, mood: Mood, noise_level: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            location,
            mood,
            noise_level,
            timestamp,
        }
    }
}
