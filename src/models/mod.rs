pub mod location;
pub mod mood;
pub mod route;
pub mod session;
pub mod zone;

pub use location::Location;
pub use mood::{Mood, MoodEntry};
pub use route::{OptimizedRoute, RoutePoint, RouteSegment, RouteSuggestion};
pub use session::WalkSession;
pub use zone::{CalmZone, StressZone};
