use std::collections::HashMap;

use tracing::debug;

use super::{
    models::{DriverStanding, Standings, TeamStanding},
    points::compute_points,
};
use crate::league::{completed_in_order, PointsConfig, Race, ResultStatus, SessionKind};

/// Ranked driver and team standings over the completed races.
pub fn build_standings(races: &[Race], points: &PointsConfig) -> Standings {
    standings_over(&completed_in_order(races), points)
}

/// Standings over all completed races, with each row's movement since the
/// round before the most recent one.
///
/// Rows new to the standings show no movement.
pub fn compute_standings_with_change(races: &[Race], points: &PointsConfig) -> Standings {
    let completed = completed_in_order(races);
    let mut latest = standings_over(&completed, points);

    if completed.len() < 2 {
        latest
            .driver_standings
            .iter_mut()
            .for_each(|row| row.position_change = 0);
        latest
            .team_standings
            .iter_mut()
            .for_each(|row| row.position_change = 0);
        return latest;
    }

    let previous = standings_over(&completed[..completed.len() - 1], points);

    let previous_drivers: HashMap<&str, u32> = previous
        .driver_standings
        .iter()
        .map(|row| (row.driver_id.as_str(), row.position))
        .collect();
    let previous_teams: HashMap<&str, u32> = previous
        .team_standings
        .iter()
        .map(|row| (row.team_id.as_str(), row.position))
        .collect();

    for row in &mut latest.driver_standings {
        let before = previous_drivers
            .get(row.driver_id.as_str())
            .copied()
            .unwrap_or(row.position);
        row.position_change = before as i32 - row.position as i32;
    }

    for row in &mut latest.team_standings {
        let before = previous_teams
            .get(row.team_id.as_str())
            .copied()
            .unwrap_or(row.position);
        row.position_change = before as i32 - row.position as i32;
    }

    debug!(
        races = completed.len(),
        drivers = latest.driver_standings.len(),
        teams = latest.team_standings.len(),
        "Computed standings with position change"
    );

    latest
}

/// Folds the given races, already filtered and ordered, into standings
fn standings_over(races: &[&Race], points: &PointsConfig) -> Standings {
    let mut drivers: HashMap<String, DriverStanding> = HashMap::new();

    for race in races {
        for (kind, session) in race.sessions.iter() {
            let is_feature = kind == SessionKind::Feature;

            for result in &session.results {
                let driver_id = result.driver_key();
                if driver_id.is_empty() {
                    debug!(race_id = %race.id, %kind, "Skipping result without driver id");
                    continue;
                }

                let row = drivers
                    .entry(driver_id.to_string())
                    .or_insert_with(|| DriverStanding::new(driver_id.to_string(), None));

                row.team_id = result.team_id.clone();
                if is_feature {
                    row.starts += 1;
                }
                if result.status == ResultStatus::Dnf {
                    row.dnfs += 1;
                }
                if is_feature && result.is_win() {
                    row.wins += 1;
                }
                if is_feature && result.is_podium() {
                    row.podiums += 1;
                }
                row.points = row
                    .points
                    .saturating_add(compute_points(result, points, kind));
            }
        }
    }

    let mut driver_standings: Vec<DriverStanding> = drivers.into_values().collect();
    driver_standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(b.podiums.cmp(&a.podiums))
            .then_with(|| a.driver_id.cmp(&b.driver_id))
    });
    for (index, row) in driver_standings.iter_mut().enumerate() {
        row.position = index as u32 + 1;
    }

    let team_standings = team_standings(&driver_standings);

    Standings {
        driver_standings,
        team_standings,
    }
}

/// Team totals from the drivers' current team assignment
fn team_standings(driver_standings: &[DriverStanding]) -> Vec<TeamStanding> {
    let mut teams: HashMap<&str, TeamStanding> = HashMap::new();

    for row in driver_standings {
        let Some(team_id) = row.team_id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };

        let team = teams.entry(team_id).or_insert_with(|| TeamStanding {
            team_id: team_id.to_string(),
            ..TeamStanding::default()
        });
        team.points = team.points.saturating_add(row.points);
        team.wins += row.wins;
    }

    let mut team_standings: Vec<TeamStanding> = teams.into_values().collect();
    team_standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    for (index, row) in team_standings.iter_mut().enumerate() {
        row.position = index as u32 + 1;
    }

    team_standings
}
