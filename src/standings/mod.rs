// Public API
pub use builder::{build_standings, compute_standings_with_change};
pub use models::{DriverStanding, Standings, TeamStanding};
pub use points::compute_points;

// Internal modules
mod builder;
mod models;
mod points;
