pub mod classify;
pub mod clustering;
pub mod config;

pub use classify::{update_zones, ZoneUpdate};
pub use clustering::{cluster_entries, Cluster};
pub use config::ZoneConfig;
