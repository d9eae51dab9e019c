use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};

use crate::league::Driver;

/// Scope key aggregating every season
pub const LIFETIME_SCOPE: &str = "lifetime";

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
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum StatKey {
    Wins,
    SprintWins,
    Podiums,
    WdcAverageFinish,
    FastestLaps,
    #[serde(rename = "sickDriftsInJapan")]
    #[strum(serialize = "sickDriftsInJapan")]
    SpecialEvents,
    CareerPoints,
    Dnfs,
    RacesAttended,
}

impl StatKey {
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Wins => "Wins",
            StatKey::SprintWins => "Sprint Wins",
            StatKey::Podiums => "Race Podiums",
            StatKey::WdcAverageFinish => "WDC Average Finish Position",
            StatKey::FastestLaps => "Fastest Laps",
            StatKey::SpecialEvents => "Sick Drifts in Japan",
            StatKey::CareerPoints => "Career Points",
            StatKey::Dnfs => "DNFs",
            StatKey::RacesAttended => "Races Attended",
        }
    }

    pub fn higher_is_better(&self) -> bool {
        !matches!(self, StatKey::WdcAverageFinish)
    }

    pub fn format_value(&self, value: f64) -> String {
        match self {
            StatKey::WdcAverageFinish => format!("{value:.2}"),
            _ => format!("{value}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatDefinition {
    pub key: StatKey,
    pub label: &'static str,
    pub higher_is_better: bool,
}

impl From<StatKey> for StatDefinition {
    fn from(key: StatKey) -> Self {
        Self {
            key,
            label: key.label(),
            higher_is_better: key.higher_is_better(),
        }
    }
}

/// Running sum of feature finishing positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageFinish {
    pub total_positions: u64,
    pub count: u32,
}

impl AverageFinish {
    pub fn record(&mut self, position: u32) {
        self.total_positions += u64::from(position);
        self.count += 1;
    }

    pub fn value(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_positions as f64 / f64::from(self.count)
        }
    }
}

/// Per-driver accumulator inside one scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopedStatEntry {
    pub wins: u32,
    pub sprint_wins: u32,
    pub podiums: u32,
    pub average_finish: AverageFinish,
    pub fastest_laps: u32,
    pub special_events: u32,
    pub career_points: u32,
    pub dnfs: u32,
    pub races_attended: u32,
}

/// Finalized statistics of one driver in one scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStatLine {
    pub driver_id: String,
    pub driver: String,
    pub wins: u32,
    pub sprint_wins: u32,
    pub podiums: u32,
    pub wdc_average_finish: f64,
    pub fastest_laps: u32,
    #[serde(rename = "sickDriftsInJapan")]
    pub special_events: u32,
    pub career_points: u32,
    pub dnfs: u32,
    pub races_attended: u32,
}

impl DriverStatLine {
    pub fn from_entry(driver_id: &str, driver: String, entry: &ScopedStatEntry) -> Self {
        Self {
            driver_id: driver_id.to_string(),
            driver,
            wins: entry.wins,
            sprint_wins: entry.sprint_wins,
            podiums: entry.podiums,
            wdc_average_finish: entry.average_finish.value(),
            fastest_laps: entry.fastest_laps,
            special_events: entry.special_events,
            career_points: entry.career_points,
            dnfs: entry.dnfs,
            races_attended: entry.races_attended,
        }
    }

    pub fn value(&self, stat: StatKey) -> f64 {
        match stat {
            StatKey::Wins => f64::from(self.wins),
            StatKey::SprintWins => f64::from(self.sprint_wins),
            StatKey::Podiums => f64::from(self.podiums),
            StatKey::WdcAverageFinish => self.wdc_average_finish,
            StatKey::FastestLaps => f64::from(self.fastest_laps),
            StatKey::SpecialEvents => f64::from(self.special_events),
            StatKey::CareerPoints => f64::from(self.career_points),
            StatKey::Dnfs => f64::from(self.dnfs),
            StatKey::RacesAttended => f64::from(self.races_attended),
        }
    }
}

/// One row of a statistic leaderboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub driver_id: String,
    pub driver: String,
    pub value: f64,
    pub display_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeOption {
    pub key: String,
    pub label: String,
}

/// Driver display names keyed by id
#[derive(Debug, Clone, Default)]
pub struct DriverCatalog {
    names: HashMap<String, String>,
}

impl DriverCatalog {
    pub fn new(drivers: &[Driver]) -> Self {
        let names = drivers
            .iter()
            .map(|driver| (driver.id.clone(), driver.name.clone()))
            .collect();
        Self { names }
    }

    pub fn name_of(&self, driver_id: &str) -> Option<&str> {
        self.names
            .get(driver_id)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Name of the driver, or the id when the catalog has none
    pub fn display_name(&self, driver_id: &str) -> String {
        self.name_of(driver_id).unwrap_or(driver_id).to_string()
    }
}
