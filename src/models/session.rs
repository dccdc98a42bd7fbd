use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Mood, MoodEntry};

/// One recorded walk: an ordered run of mood check-ins plus incrementally
/// maintained per-mood counts.
///
/// Invariant: `calm_count + neutral_count + stress_count == mood_entries.len()`
/// at all times. Entries are only ever appended through `add_entry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkSession {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub mood_entries: Vec<MoodEntry>,
    pub calm_count: u32,
    pub neutral_count: u32,
    pub stress_count: u32,
    /// Natural-language summary attached when the walk completes.
    pub summary: Option<String>,
}

impl WalkSession {
    pub fn begin(start_time: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            start_time,
            end_time: None,
            mood_entries: Vec::new(),
            calm_count: 0,
            neutral_count: 0,
            stress_count: 0,
            summary: None,
        }
    }

    pub fn add_entry(&mut self, entry: MoodEntry) {
        match entry.mood {
            Mood::Calm => self.calm_count += 1,
            Mood::Neutral => self.neutral_count += 1,
            Mood::Stressed => self.stress_count += 1,
        }
        self.mood_entries.push(entry);
    }

    pub fn end_at(&mut self, end_time: DateTime<Utc>) {
        self.end_time = Some(end_time);
    }

    pub fn entry_count(&self) -> usize {
        self.mood_entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::TimeZone;

    fn entry(mood: Mood) -> MoodEntry {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        MoodEntry::new(Location::new(45.5, -73.6, ts), mood, 50.0, ts)
    }

    #[test]
    fn counts_track_entries() {
        let mut session = WalkSession::begin(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());
        session.add_entry(entry(Mood::Calm));
        session.add_entry(entry(Mood::Calm));
        session.add_entry(entry(Mood::Stressed));
        session.add_entry(entry(Mood::Neutral));

        assert_eq!(session.calm_count, 2);
        assert_eq!(session.neutral_count, 1);
        assert_eq!(session.stress_count, 1);
        assert_eq!(
            (session.calm_count + session.neutral_count + session.stress_count) as usize,
            session.entry_count()
        );
    }
}
