use chrono::{DateTime, Utc};

use crate::geo::within_radius;
use crate::models::{Location, Mood, MoodEntry};

/// A transient group of spatially near mood entries from one clustering pass.
/// Never persisted; zones are derived from clusters at walk end.
#[derive(Debug, Clone)]
pub struct Cluster {
    /// The anchor entry's location. Fixed when the cluster is opened and
    /// never recomputed as a centroid, so results depend on input order
    /// (earlier entries become anchors). Sort the input by timestamp first
    /// when a deterministic pass is needed.
    pub center: Location,
    pub entries: Vec<MoodEntry>,
}

impl Cluster {
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    fn mood_count(&self, mood: Mood) -> usize {
        self.entries.iter().filter(|e| e.mood == mood).count()
    }

    /// Fraction of members that are stressed; 0 for an empty cluster.
    pub fn stress_rate(&self) -> f64 {
        rate(self.mood_count(Mood::Stressed), self.entries.len())
    }

    /// Fraction of members that are calm; 0 for an empty cluster.
    pub fn calm_rate(&self) -> f64 {
        rate(self.mood_count(Mood::Calm), self.entries.len())
    }

    /// Latest timestamp among members. `None` only for an empty cluster,
    /// which the clustering pass never produces.
    pub fn latest_timestamp(&self) -> Option<DateTime<Utc>> {
        self.entries.iter().map(|e| e.timestamp).max()
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Group entries into proximity clusters with a single greedy pass.
///
/// Walks the input in order; the first unprocessed entry anchors a new
/// cluster, then the whole input (including earlier, still-unprocessed
/// entries) is scanned and everything within `radius_m` of the anchor joins
/// and is marked processed. O(n²) distance checks, fine at one session's
/// sample counts.
///
/// Every input entry lands in exactly one cluster and no cluster is empty.
pub fn cluster_entries(entries: &[MoodEntry], radius_m: f64) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut processed = vec![false; entries.len()];

    for i in 0..entries.len() {
        if processed[i] {
            continue;
        }

        let anchor = entries[i].location;
        let mut members = Vec::new();

        for (j, entry) in entries.iter().enumerate() {
            if processed[j] {
                continue;
            }
            if within_radius(
                &anchor,
                entry.location.latitude,
                entry.location.longitude,
                radius_m,
            ) {
                processed[j] = true;
                members.push(entry.clone());
            }
        }

        clusters.push(Cluster {
            center: anchor,
            entries: members,
        });
    }

    clusters
}
