use serde::{Deserialize, Serialize};

use super::models::{
    null_as_default, PointsConfig, Race, RaceResult, RaceSessions, RaceStatus, Session,
};
use crate::standings::{build_standings, DriverStanding};

/// A season or year label as written in the archive: `3`, `"S3"`, `"Season 3 (2024)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeasonLabel {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueArchive {
    #[serde(default)]
    pub seasons: Vec<ArchiveSeason>,
}

/// One archived season block from `league-history.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveSeason {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub season_id: Option<String>,
    #[serde(default)]
    pub season: Option<SeasonLabel>,
    #[serde(default)]
    pub year: Option<SeasonLabel>,
    #[serde(default)]
    pub rounds: Vec<ArchiveRound>,
    /// Final standings published for the season, overriding computed ones
    #[serde(default)]
    pub standings: Vec<ArchiveStanding>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveStanding {
    #[serde(default, deserialize_with = "null_as_default")]
    pub driver_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub points: u32,
}

impl ArchiveStanding {
    /// `driverId`, falling back to `driver` when the id is absent or empty
    pub fn driver_key(&self) -> &str {
        if !self.driver_id.is_empty() {
            return &self.driver_id;
        }
        self.driver.as_deref().unwrap_or_default()
    }
}

/// One archived round; results are either split by session or a flat list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRound {
    #[serde(default)]
    pub round: u32,
    #[serde(default)]
    pub circuit: Option<String>,
    #[serde(default)]
    pub circuit_id: Option<String>,
    /// Driver id credited with the fastest lap of the round
    #[serde(default)]
    pub fastest_lap: Option<String>,
    #[serde(default)]
    pub sessions: Option<ArchiveSessions>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RaceResult>,
    #[serde(
        default,
        rename = "sickDriftsInJapan",
        deserialize_with = "null_as_default"
    )]
    pub special_event: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveSessions {
    #[serde(default)]
    pub sprint: Option<ArchiveSession>,
    #[serde(default)]
    pub feature: Option<ArchiveSession>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveSession {
    #[serde(default)]
    pub results: Option<Vec<RaceResult>>,
}

impl ArchiveSession {
    fn to_session(&self) -> Option<Session> {
        self.results.clone().map(Session::new)
    }
}

impl ArchiveRound {
    /// Normalizes the round into a completed canonical race.
    ///
    /// A round without session results is read as a feature-only race from
    /// the flat `results` list. The round-level fastest lap is folded into
    /// the matching driver's results.
    pub fn to_race(&self) -> Race {
        let split = self.sessions.as_ref();
        let mut sessions = RaceSessions {
            sprint: split
                .and_then(|s| s.sprint.as_ref())
                .and_then(ArchiveSession::to_session),
            feature: split
                .and_then(|s| s.feature.as_ref())
                .and_then(ArchiveSession::to_session),
        };

        if sessions.is_empty() {
            sessions.feature = Some(Session::new(self.results.clone()));
        }

        let fastest = self.fastest_lap.as_deref().filter(|id| !id.is_empty());
        for session in [sessions.sprint.as_mut(), sessions.feature.as_mut()]
            .into_iter()
            .flatten()
        {
            for result in &mut session.results {
                if result.driver_id.is_empty() {
                    result.driver_id = result.driver_key().to_string();
                }
                if fastest.is_some_and(|id| result.driver_id == id) {
                    result.fastest_lap = true;
                }
            }
        }

        Race {
            id: format!("archive-round-{}", self.round),
            round: self.round,
            status: RaceStatus::Completed,
            sessions,
            name: self.circuit.clone().unwrap_or_default(),
            circuit_id: self.circuit_id.clone(),
            ..Race::default()
        }
    }
}

impl ArchiveSeason {
    /// Explicit identifier of the block, `id` taking precedence over `seasonId`
    pub fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.season_id.as_deref())
    }

    pub fn races(&self) -> Vec<Race> {
        self.rounds.iter().map(ArchiveRound::to_race).collect()
    }

    /// Final driver standings of the season.
    ///
    /// Published overrides win when present, ranked by their listed position.
    /// Otherwise the standings are built from the archived rounds.
    pub fn final_standings(&self, points: &PointsConfig) -> Vec<DriverStanding> {
        if self.standings.is_empty() {
            return build_standings(&self.races(), points).driver_standings;
        }

        let mut overrides: Vec<&ArchiveStanding> = self.standings.iter().collect();
        overrides.sort_by(|a, b| {
            let by_position = match (a.position, b.position) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => b.points.cmp(&a.points),
            };
            by_position.then_with(|| a.driver_key().cmp(b.driver_key()))
        });

        overrides
            .into_iter()
            .enumerate()
            .map(|(index, row)| DriverStanding {
                driver_id: row.driver_key().to_string(),
                team_id: row.team_id.clone(),
                points: row.points,
                position: index as u32 + 1,
                ..DriverStanding::default()
            })
            .collect()
    }
}
