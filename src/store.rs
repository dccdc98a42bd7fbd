use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::models::{CalmZone, StressZone, WalkSession};
use crate::walk::WalkOutcome;

/// On-disk document holding everything the app persists, under fixed
/// logical keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WalkData {
    sessions: Vec<WalkSession>,
    calm_zones: Vec<CalmZone>,
    stress_zones: Vec<StressZone>,
}

/// JSON-file persistence for sessions and the zone stores.
///
/// The whole document is rewritten on every save, so a completed walk's
/// session and its replaced zone collections land in one write and cannot
/// diverge if the process dies between them.
pub struct WalkStore {
    path: PathBuf,
    data: RwLock<WalkData>,
}

impl WalkStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read walk data from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            WalkData::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn sessions(&self) -> Vec<WalkSession> {
        self.data.read().unwrap().sessions.clone()
    }

    pub fn calm_zones(&self) -> Vec<CalmZone> {
        self.data.read().unwrap().calm_zones.clone()
    }

    pub fn stress_zones(&self) -> Vec<StressZone> {
        self.data.read().unwrap().stress_zones.clone()
    }

    /// Append the completed session and replace both zone collections in a
    /// single save.
    pub fn record_walk(&self, outcome: WalkOutcome) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.sessions.push(outcome.session);
        guard.calm_zones = outcome.calm_zones;
        guard.stress_zones = outcome.stress_zones;
        self.persist(&guard)
    }

    /// Drop all learned zones but keep the session history.
    pub fn clear_zones(&self) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.calm_zones.clear();
        guard.stress_zones.clear();
        self.persist(&guard)
    }

    fn persist(&self, data: &WalkData) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write walk data to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Mood, MoodEntry};
    use chrono::{TimeZone, Utc};

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("moodwalk-{}.json", uuid::Uuid::new_v4()))
    }

    fn sample_outcome() -> WalkOutcome {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let mut session = WalkSession::begin(ts);
        session.add_entry(MoodEntry::new(
            Location::new(45.5, -73.6, ts),
            Mood::Calm,
            42.0,
            ts,
        ));
        session.end_at(ts);

        WalkOutcome {
            session,
            calm_zones: vec![CalmZone::new(Location::new(45.5, -73.6, ts), 30.0, 0.8, 3, ts)],
            stress_zones: Vec::new(),
        }
    }

    #[test]
    fn record_then_reopen_round_trips() {
        let path = temp_store_path();
        {
            let store = WalkStore::open(path.clone()).unwrap();
            store.record_walk(sample_outcome()).unwrap();
        }

        let reopened = WalkStore::open(path.clone()).unwrap();
        assert_eq!(reopened.sessions().len(), 1);
        assert_eq!(reopened.calm_zones().len(), 1);
        assert!(reopened.stress_zones().is_empty());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn clear_zones_keeps_sessions() {
        let path = temp_store_path();
        let store = WalkStore::open(path.clone()).unwrap();
        store.record_walk(sample_outcome()).unwrap();
        store.clear_zones().unwrap();

        assert_eq!(store.sessions().len(), 1);
        assert!(store.calm_zones().is_empty());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let path = temp_store_path();
        fs::write(&path, "not json").unwrap();

        let store = WalkStore::open(path.clone()).unwrap();
        assert!(store.sessions().is_empty());

        let _ = fs::remove_file(path);
    }
}
