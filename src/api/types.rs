use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::league::{Race, RaceStatus, ScoredSession, StewardRound};
use crate::standings::DriverStanding;
use crate::stats::{LeaderboardEntry, StatDefinition};

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    pub scope: Option<String>,
    pub stat: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub scope: String,
    pub stat: StatDefinition,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceDetailResponse {
    pub id: String,
    pub round: u32,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    pub status: RaceStatus,
    pub sessions: Vec<ScoredSession>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: String,
    pub round: u32,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    pub status: RaceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit_id: Option<String>,
}

impl From<&Race> for CalendarEntry {
    fn from(race: &Race) -> Self {
        Self {
            id: race.id.clone(),
            round: race.round,
            name: race.name.clone(),
            date: race.date,
            status: race.status,
            circuit_id: race.circuit_id.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub races: Vec<CalendarEntry>,
    pub next_race_id: Option<String>,
    pub latest_race_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StewardsQuery {
    pub round: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StewardsResponse {
    pub options: Vec<u32>,
    pub rounds: Vec<StewardRound>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStandingsResponse {
    pub index: usize,
    pub season_id: Option<String>,
    pub standings: Vec<DriverStanding>,
}
