mod errors;
pub mod models;
pub mod repository;

pub use errors::DataError;
pub use models::LeagueSnapshot;
pub use repository::{
    load_snapshot, FileLeagueRepository, InMemoryLeagueRepository, LeagueRepository,
};

/// Resource names, each served from `<name>.json`
pub mod resources {
    pub const DRIVERS: &str = "drivers";
    pub const TEAMS: &str = "teams";
    pub const RACES: &str = "races";
    pub const POINTS: &str = "points";
    pub const SEASONS: &str = "seasons";
    pub const LEAGUE_HISTORY: &str = "league-history";
    pub const LICENSES: &str = "licenses";
    pub const STEWARDS: &str = "stewards";
}
