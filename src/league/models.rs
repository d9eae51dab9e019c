use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::dates;

/// Reads `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outcome status of a single result, as published in the race data.
///
/// Anything the data carries that is not one of the known codes becomes
/// `Unknown` so a typo never takes the whole computation down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum ResultStatus {
    Finished,
    #[serde(rename = "DNF")]
    #[strum(serialize = "DNF")]
    Dnf,
    #[serde(rename = "DNS")]
    #[strum(serialize = "DNS")]
    Dns,
    Ret,
    #[serde(rename = "DSQ")]
    #[strum(serialize = "DSQ")]
    Dsq,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ResultStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, ResultStatus::Finished)
    }

    /// Every status except `Finished`
    pub fn is_non_finish(&self) -> bool {
        !self.is_finished()
    }

    /// Did not finish or retired
    pub fn is_retirement(&self) -> bool {
        matches!(self, ResultStatus::Dnf | ResultStatus::Ret)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionKind {
    Sprint,
    Feature,
}

/// One driver's outcome in one session of one race.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub driver_id: String,
    /// Archive rows may name the driver here, alone or next to `driverId`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ResultStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fastest_lap: bool,
    // Display-only fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub penalties: Vec<String>,
}

impl RaceResult {
    /// `driverId`, falling back to `driver` when the id is absent or empty
    pub fn driver_key(&self) -> &str {
        if !self.driver_id.is_empty() {
            return &self.driver_id;
        }
        self.driver.as_deref().unwrap_or_default()
    }

    pub fn is_win(&self) -> bool {
        self.position == Some(1)
    }

    pub fn is_podium(&self) -> bool {
        matches!(self.position, Some(1..=3))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RaceResult>,
}

impl Session {
    pub fn new(results: Vec<RaceResult>) -> Self {
        Self { results }
    }
}

/// The zero-or-one sprint and zero-or-one feature session of a race.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceSessions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<Session>,
}

impl RaceSessions {
    pub fn get(&self, kind: SessionKind) -> Option<&Session> {
        match kind {
            SessionKind::Sprint => self.sprint.as_ref(),
            SessionKind::Feature => self.feature.as_ref(),
        }
    }

    /// Present sessions, sprint first
    pub fn iter(&self) -> impl Iterator<Item = (SessionKind, &Session)> {
        self.sprint
            .iter()
            .map(|session| (SessionKind::Sprint, session))
            .chain(
                self.feature
                    .iter()
                    .map(|session| (SessionKind::Feature, session)),
            )
    }

    pub fn is_empty(&self) -> bool {
        self.sprint.is_none() && self.feature.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    Completed,
    #[default]
    #[serde(other)]
    Upcoming,
}

/// One calendar event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub round: u32,
    #[serde(default, with = "dates::lenient")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RaceStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sessions: RaceSessions,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_cars: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laps: Option<u32>,
}

impl Race {
    pub fn is_completed(&self) -> bool {
        self.status == RaceStatus::Completed
    }
}

/// Completed races in chronological order.
///
/// Ordered by date, then round. Races without a usable date go after every
/// dated race.
pub fn completed_in_order(races: &[Race]) -> Vec<&Race> {
    let mut completed: Vec<&Race> = races.iter().filter(|race| race.is_completed()).collect();
    completed.sort_by(|a, b| {
        let by_date = match (a.date, b.date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        };
        by_date.then(a.round.cmp(&b.round))
    });
    completed
}

/// Scoring rules for one season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsConfig {
    #[serde(default)]
    pub feature_points: Vec<u32>,
    #[serde(default)]
    pub sprint_points: Vec<u32>,
    #[serde(default)]
    pub fastest_lap_bonus: u32,
    #[serde(default)]
    pub fastest_lap_only_if_points: bool,
    #[serde(default)]
    pub season: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PointsConfig {
    pub fn table(&self, kind: SessionKind) -> &[u32] {
        match kind {
            SessionKind::Sprint => &self.sprint_points,
            SessionKind::Feature => &self.feature_points,
        }
    }
}

/// Canonical season entry from `seasons.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonDefinition {
    pub id: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub points: Option<PointsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonCatalog {
    #[serde(default)]
    pub seasons: Vec<SeasonDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
