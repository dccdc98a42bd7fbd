//! moodwalk: turns geolocated mood samples from walks into persistent
//! calm/stress zone maps, session insights and calm-biased routes.
//!
//! Everything here is synchronous and pure over value snapshots. The host
//! application calls in at two points: when a walk ends
//! ([`walk::complete_walk`], then [`store::WalkStore::record_walk`]) and
//! when a route is requested ([`routing::plan_or_fallback`] or
//! [`routing::suggest_route`]). Location/noise acquisition, map rendering
//! and any real routing service live outside this crate.

pub mod geo;
pub mod insights;
pub mod models;
pub mod routing;
pub mod store;
pub mod walk;
pub mod zones;

pub use insights::{summarize_walk, InsightConfig};
pub use models::{
    CalmZone, Location, Mood, MoodEntry, OptimizedRoute, RoutePoint, RouteSegment,
    RouteSuggestion, StressZone, WalkSession,
};
pub use routing::{
    fallback_route, plan_or_fallback, score_route, suggest_route, ExternalRoute, RouteConfig,
    RouteProvider, RouteScore,
};
pub use store::WalkStore;
pub use walk::{complete_walk, WalkOutcome};
pub use zones::{cluster_entries, update_zones, Cluster, ZoneConfig, ZoneUpdate};
