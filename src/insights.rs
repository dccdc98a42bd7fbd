//! Turns a completed walk session into a short natural-language summary.
//!
//! Four independent heuristics each contribute at most one sentence, always
//! in the same order: overall tone, noise correlation, time-of-day pattern,
//! location pattern. Each works from the full entry list; none reads
//! another's output.

use chrono::{FixedOffset, Local, Offset, Timelike};

use crate::models::{Mood, WalkSession};
use crate::zones::cluster_entries;

/// Fixed response for a session without any mood entries.
pub const NO_DATA_SUMMARY: &str = "No mood data recorded for this walk.";

#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// Entries above this noise level count as high-noise readings.
    pub high_noise_db: f64,

    /// Time-of-day advice fires when the calmest bucket's stress rate is
    /// below this...
    pub low_stress_rate: f64,
    /// ...and the most stressful bucket's rate is above this.
    pub high_stress_rate: f64,

    /// Radius for the location-pattern reclustering pass.
    pub location_radius_m: f64,

    /// A cluster reads as consistently calm/stressful above this rate.
    pub rate_threshold: f64,

    /// Offset applied before bucketing entries by hour of day. Defaults to
    /// the machine-local offset; tests pin a fixed one.
    pub utc_offset: FixedOffset,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            high_noise_db: 60.0,
            low_stress_rate: 0.2,
            high_stress_rate: 0.4,
            location_radius_m: 50.0,
            rate_threshold: 0.6,
            utc_offset: Local::now().offset().fix(),
        }
    }
}

/// Daypart buckets for the time-of-day heuristic. Everything outside
/// morning and afternoon, including past-midnight hours, is evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    fn of_hour(hour: u32) -> Self {
        match hour {
            6..=11 => DayPart::Morning,
            12..=17 => DayPart::Afternoon,
            _ => DayPart::Evening,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
        }
    }
}

/// Build the session summary. Empty sessions get [`NO_DATA_SUMMARY`].
pub fn summarize_walk(session: &WalkSession, config: &InsightConfig) -> String {
    if session.mood_entries.is_empty() {
        return NO_DATA_SUMMARY.to_string();
    }

    let mut sentences = Vec::new();

    if let Some(sentence) = overall_tone(session) {
        sentences.push(sentence);
    }
    if let Some(sentence) = noise_correlation(session, config) {
        sentences.push(sentence);
    }
    if let Some(sentence) = time_of_day_pattern(session, config) {
        sentences.push(sentence);
    }
    if let Some(sentence) = location_pattern(session, config) {
        sentences.push(sentence);
    }

    sentences.join(" ")
}

fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (count as f64 / total as f64 * 100.0).round() as u32
    }
}

fn overall_tone(session: &WalkSession) -> Option<String> {
    let total = session.entry_count();
    let stressed = session.stress_count as usize;
    let calm = session.calm_count as usize;

    let sentence = if stressed > calm {
        format!(
            "You felt stressed for {}% of this walk.",
            percent(stressed, total)
        )
    } else if calm > stressed {
        format!("You felt calm for {}% of this walk.", percent(calm, total))
    } else {
        "This walk was evenly balanced between calm and stressful moments.".to_string()
    };
    Some(sentence)
}

fn noise_correlation(session: &WalkSession, config: &InsightConfig) -> Option<String> {
    let high_noise: Vec<_> = session
        .mood_entries
        .iter()
        .filter(|e| e.noise_level > config.high_noise_db)
        .collect();
    let stressed_in_noise = high_noise
        .iter()
        .filter(|e| e.mood == Mood::Stressed)
        .count();

    if stressed_in_noise == 0 {
        return None;
    }

    Some(format!(
        "Noise may be a trigger: {} of your stressed moments came in loud surroundings ({}% of high-noise readings).",
        stressed_in_noise,
        percent(stressed_in_noise, high_noise.len())
    ))
}

fn time_of_day_pattern(session: &WalkSession, config: &InsightConfig) -> Option<String> {
    const PARTS: [DayPart; 3] = [DayPart::Morning, DayPart::Afternoon, DayPart::Evening];

    let mut totals = [0usize; 3];
    let mut stressed = [0usize; 3];

    for entry in &session.mood_entries {
        let hour = entry.timestamp.with_timezone(&config.utc_offset).hour();
        let idx = match DayPart::of_hour(hour) {
            DayPart::Morning => 0,
            DayPart::Afternoon => 1,
            DayPart::Evening => 2,
        };
        totals[idx] += 1;
        if entry.mood == Mood::Stressed {
            stressed[idx] += 1;
        }
    }

    // Empty buckets count as stress rate 0.
    let rates: Vec<f64> = (0..3)
        .map(|i| {
            if totals[i] == 0 {
                0.0
            } else {
                stressed[i] as f64 / totals[i] as f64
            }
        })
        .collect();

    // Ties resolve to the earliest daypart.
    let mut min_idx = 0;
    let mut max_idx = 0;
    for i in 1..3 {
        if rates[i] < rates[min_idx] {
            min_idx = i;
        }
        if rates[i] > rates[max_idx] {
            max_idx = i;
        }
    }

    if rates[min_idx] < config.low_stress_rate && rates[max_idx] > config.high_stress_rate {
        Some(format!(
            "You tended to be least stressed in the {}; consider walking more during that time.",
            PARTS[min_idx].label()
        ))
    } else {
        None
    }
}

fn location_pattern(session: &WalkSession, config: &InsightConfig) -> Option<String> {
    let clusters = cluster_entries(&session.mood_entries, config.location_radius_m);

    if clusters
        .iter()
        .any(|c| c.stress_rate() > config.rate_threshold)
    {
        return Some("Some areas on this route consistently triggered stress.".to_string());
    }
    if clusters
        .iter()
        .any(|c| c.calm_rate() > config.rate_threshold)
    {
        return Some("Some areas consistently provided calm moments.".to_string());
    }
    None
}
