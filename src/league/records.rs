use serde::{Deserialize, Serialize};

use crate::stats::DriverCatalog;

/// Licence points entry from `licenses.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    #[serde(default)]
    pub driver_id: Option<String>,
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub lp: Option<i32>,
    #[serde(default)]
    pub ddwp: Option<i32>,
    #[serde(default)]
    pub awp: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseRow {
    pub driver: String,
    pub lp: i32,
    pub ddwp: i32,
    pub awp: i32,
}

pub fn license_rows(records: &[LicenseRecord], catalog: &DriverCatalog) -> Vec<LicenseRow> {
    records
        .iter()
        .map(|record| {
            let driver = record
                .driver_id
                .as_deref()
                .and_then(|id| catalog.name_of(id))
                .or(record.driver.as_deref())
                .or(record.driver_id.as_deref())
                .unwrap_or_default()
                .to_string();

            LicenseRow {
                driver,
                lp: record.lp.unwrap_or_default(),
                ddwp: record.ddwp.unwrap_or_default(),
                awp: record.awp.unwrap_or_default(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StewardDecision {
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub incident: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub penalty: String,
}

/// Stewarding decisions of one round from `stewards.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StewardRound {
    pub round: u32,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub decisions: Vec<StewardDecision>,
}

/// Keeps the rounds matching `filter`, either `all` or a round number
pub fn filter_steward_rounds<'a>(rounds: &'a [StewardRound], filter: &str) -> Vec<&'a StewardRound> {
    if filter == "all" {
        return rounds.iter().collect();
    }

    rounds
        .iter()
        .filter(|round| round.round.to_string() == filter.trim())
        .collect()
}

/// Rounds that have decisions, latest first
pub fn steward_round_options(rounds: &[StewardRound]) -> Vec<u32> {
    let mut options: Vec<u32> = rounds.iter().map(|round| round.round).collect();
    options.sort_unstable_by(|a, b| b.cmp(a));
    options
}
