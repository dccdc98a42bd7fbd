/// Tunable parameters for route scoring and synthesis.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Neutral starting score before any zone influence.
    pub base_score: f64,

    /// Per waypoint-hit penalty inside a stress zone. Twice the calm reward
    /// on purpose: avoiding stress matters more than chasing calm.
    pub stress_penalty: f64,

    /// Per waypoint-hit reward inside a calm zone.
    pub calm_reward: f64,

    /// Target length of one synthesized segment, meters.
    pub step_length_m: f64,

    /// Synthesized routes always have between `min_steps` and `max_steps`
    /// segments regardless of distance.
    pub min_steps: usize,
    pub max_steps: usize,

    /// Jitter amplitude in degrees applied to interior waypoints.
    pub jitter_deg: f64,

    /// Assumed walking speed in meters per second.
    pub walking_speed_mps: f64,

    /// Simple suggestions only consider zones within this distance of both
    /// endpoints.
    pub nearby_radius_m: f64,

    /// Suggestion score weight for the chosen calm zone's score.
    pub suggest_calm_weight: f64,

    /// Flat per-zone suggestion penalty for nearby stress zones.
    pub suggest_stress_penalty: f64,

    /// Suggestion duration estimate, minutes per kilometer.
    pub pace_mins_per_km: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            base_score: 0.5,
            stress_penalty: 0.1,
            calm_reward: 0.05,
            step_length_m: 200.0,
            min_steps: 3,
            max_steps: 8,
            jitter_deg: 0.000_05,
            walking_speed_mps: 1.4,
            nearby_radius_m: 200.0,
            suggest_calm_weight: 0.3,
            suggest_stress_penalty: 0.2,
            pace_mins_per_km: 12.0,
        }
    }
}
