use serde::{Deserialize, Serialize};

use crate::league::{
    Driver, LeagueArchive, LicenseRecord, PointsConfig, Race, SeasonDefinition, StewardRound,
    Team,
};
use crate::stats::{DriverCatalog, ScopedLeaderboards, StatsAggregator, StatsSources};

/// Every resource the site reads. Handlers fill only the fields they need.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub drivers: Vec<Driver>,
    pub teams: Vec<Team>,
    pub races: Vec<Race>,
    pub points: PointsConfig,
    pub seasons: Vec<SeasonDefinition>,
    pub archive: LeagueArchive,
    pub licenses: Vec<LicenseRecord>,
    pub stewards: Vec<StewardRound>,
}

impl LeagueSnapshot {
    pub fn leaderboards(&self, aggregator: &StatsAggregator) -> ScopedLeaderboards {
        let drivers = DriverCatalog::new(&self.drivers);
        aggregator.aggregate(StatsSources {
            seasons: &self.seasons,
            archive: &self.archive,
            races: &self.races,
            current_points: &self.points,
            drivers: &drivers,
        })
    }

    /// Points config of a season definition, falling back to the current one
    pub fn points_for_season(&self, season_id: Option<&str>) -> &PointsConfig {
        season_id
            .and_then(|id| self.seasons.iter().find(|season| season.id == id))
            .and_then(|season| season.points.as_ref())
            .unwrap_or(&self.points)
    }
}
