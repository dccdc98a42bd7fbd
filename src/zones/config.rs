/// Tunable thresholds for clustering and zone classification.
#[derive(Debug, Clone)]
pub struct ZoneConfig {
    /// Radius used when clustering one session's entries at walk end.
    pub cluster_radius_m: f64,

    /// A cluster merges into an existing zone when the zone's center is
    /// within this distance of the cluster's center. Independent of
    /// `cluster_radius_m`.
    pub merge_radius_m: f64,

    /// Radius given to newly created zones.
    pub zone_radius_m: f64,

    /// Clusters below this size never produce or update a zone.
    pub min_cluster_size: usize,

    /// A cluster becomes a zone candidate when its stress (or calm) rate
    /// exceeds this fraction. Stress wins when both could apply.
    pub rate_threshold: f64,

    /// Saturating score bump applied when a cluster merges into an
    /// existing zone.
    pub score_increment: f64,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            cluster_radius_m: 30.0,
            merge_radius_m: 50.0,
            zone_radius_m: 30.0,
            min_cluster_size: 2,
            rate_threshold: 0.6,
            score_increment: 0.1,
        }
    }
}
