pub mod collectors;
pub mod leaderboard;
pub mod seasons;
pub mod service;

mod errors;
pub mod models;

pub use errors::StatsError;
pub use leaderboard::{rank_for_stat, ScopedLeaderboards};
pub use models::*;
pub use seasons::{resolve_season_key, SeasonResolver};
pub use service::{
    current_scope_key, scope_options, StatsAggregator, StatsAggregatorBuilder, StatsSources,
};

use crate::league::{RaceResult, SessionKind};

/// Default leaderboard length
pub const DEFAULT_TOP_N: usize = 10;

/// A single scored result as seen by the collectors
#[derive(Debug, Clone, Copy)]
pub struct ResultSample<'a> {
    pub result: &'a RaceResult,
    pub session: SessionKind,
    pub points: u32,
}

impl ResultSample<'_> {
    pub fn is_feature(&self) -> bool {
        self.session == SessionKind::Feature
    }

    pub fn is_sprint(&self) -> bool {
        self.session == SessionKind::Sprint
    }
}

/// Folds one scored result into a driver's running statistics.
pub trait StatCollector: Send + Sync {
    fn collect(&self, entry: &mut ScopedStatEntry, sample: &ResultSample<'_>);
}
