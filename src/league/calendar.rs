use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::{completed_in_order, PointsConfig, Race, SessionKind};
use crate::standings::compute_points;

/// Races ordered by round number
pub fn calendar(races: &[Race]) -> Vec<&Race> {
    let mut ordered: Vec<&Race> = races.iter().collect();
    ordered.sort_by_key(|race| race.round);
    ordered
}

/// First race dated after `now`, regardless of its status
pub fn next_race(races: &[Race], now: DateTime<Utc>) -> Option<&Race> {
    races
        .iter()
        .filter(|race| race.date.is_some_and(|date| date > now))
        .min_by_key(|race| (race.date, race.round))
}

/// Most recently completed race
pub fn latest_completed(races: &[Race]) -> Option<&Race> {
    completed_in_order(races).last().copied()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub position: Option<u32>,
    pub driver_id: String,
    pub team_id: Option<String>,
    pub points: u32,
    pub fastest_lap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSession {
    pub session: SessionKind,
    pub results: Vec<ScoredResult>,
}

/// Every result of the race with the points it earned in its session
pub fn score_race(race: &Race, points: &PointsConfig) -> Vec<ScoredSession> {
    race.sessions
        .iter()
        .map(|(kind, session)| ScoredSession {
            session: kind,
            results: session
                .results
                .iter()
                .map(|result| ScoredResult {
                    position: result.position,
                    driver_id: result.driver_id.clone(),
                    team_id: result.team_id.clone(),
                    points: compute_points(result, points, kind),
                    fastest_lap: result.fastest_lap,
                })
                .collect(),
        })
        .collect()
}
