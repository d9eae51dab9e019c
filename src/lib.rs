// Library crate for the league standings server
// This file exposes the public API for integration tests

pub mod api;
pub mod config;
pub mod data;
pub mod league;
pub mod shared;
pub mod standings;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use data::{
    load_snapshot, DataError, FileLeagueRepository, InMemoryLeagueRepository, LeagueRepository,
    LeagueSnapshot,
};
pub use shared::{AppError, AppState};
pub use standings::{build_standings, compute_points, compute_standings_with_change, Standings};
pub use stats::{ScopedLeaderboards, StatKey, StatsAggregator};
