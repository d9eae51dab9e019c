// Public API
pub use archive::{
    ArchiveRound, ArchiveSeason, ArchiveSession, ArchiveSessions, ArchiveStanding, LeagueArchive,
    SeasonLabel,
};
pub use calendar::{calendar, latest_completed, next_race, score_race, ScoredResult, ScoredSession};
pub use models::{
    completed_in_order, Driver, PointsConfig, Race, RaceResult, RaceSessions, RaceStatus,
    ResultStatus, SeasonCatalog, SeasonDefinition, Session, SessionKind, Team,
};
pub use records::{
    filter_steward_rounds, license_rows, steward_round_options, LicenseRecord, LicenseRow,
    StewardDecision, StewardRound,
};

// Internal modules
mod archive;
mod calendar;
pub mod dates;
mod models;
mod records;
