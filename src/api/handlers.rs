use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use super::types::{
    CalendarEntry, CalendarResponse, HistoryStandingsResponse, RaceDetailResponse,
    StatsQuery, StatsResponse, StewardsQuery, StewardsResponse,
};
use crate::data::{LeagueRepository, LeagueSnapshot};
use crate::league::{
    self, filter_steward_rounds, license_rows, score_race, steward_round_options, LicenseRow,
};
use crate::shared::{AppError, AppState};
use crate::standings::{compute_standings_with_change, Standings};
use crate::stats::{
    scope_options, DriverCatalog, ScopeOption, SeasonResolver, StatDefinition, StatKey,
    StatsError, LIFETIME_SCOPE,
};

// Each handler fetches only the resources it reads, so a broken licence or
// stewarding file cannot take down the standings.

/// GET /standings
#[instrument(name = "standings", skip(state))]
pub async fn standings(State(state): State<AppState>) -> Result<Json<Standings>, AppError> {
    let repository = state.repository.as_ref();
    let (races, points) = futures::try_join!(repository.races(), repository.points())?;
    let standings = compute_standings_with_change(&races, &points);

    info!(
        drivers = standings.driver_standings.len(),
        teams = standings.team_standings.len(),
        "Standings computed"
    );

    Ok(Json(standings))
}

/// GET /stats?scope=<key>&stat=<key>
///
/// Defaults to lifetime wins.
#[instrument(name = "stats", skip(state))]
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let scope = query.scope.unwrap_or_else(|| LIFETIME_SCOPE.to_string());
    let stat_name = query.stat.unwrap_or_else(|| StatKey::Wins.to_string());
    let stat =
        StatKey::from_str(&stat_name).map_err(|_| StatsError::UnknownStat(stat_name.clone()))?;

    let snapshot = stats_snapshot(state.repository.as_ref()).await?;
    let leaderboards = snapshot.leaderboards(&state.aggregator);
    let entries = leaderboards.top(&scope, stat, state.top_n)?;

    debug!(%scope, %stat, rows = entries.len(), "Leaderboard ranked");

    Ok(Json(StatsResponse {
        scope,
        stat: stat.into(),
        entries,
    }))
}

/// Drivers, races, points, seasons and the archive
async fn stats_snapshot(
    repository: &(dyn LeagueRepository + Send + Sync),
) -> Result<LeagueSnapshot, AppError> {
    let (drivers, races, points, seasons, archive) = futures::try_join!(
        repository.drivers(),
        repository.races(),
        repository.points(),
        repository.seasons(),
        repository.archive(),
    )?;

    Ok(LeagueSnapshot {
        drivers,
        races,
        points,
        seasons,
        archive,
        ..LeagueSnapshot::default()
    })
}

/// GET /stats/scopes
#[instrument(name = "stat_scopes", skip(state))]
pub async fn stat_scopes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScopeOption>>, AppError> {
    let repository = state.repository.as_ref();
    let (seasons, points) = futures::try_join!(repository.seasons(), repository.points())?;
    Ok(Json(scope_options(&seasons, &points)))
}

/// GET /stats/categories
pub async fn stat_categories() -> Json<Vec<StatDefinition>> {
    Json(StatKey::iter().map(StatDefinition::from).collect())
}

/// GET /races/:race_id
#[instrument(name = "race_detail", skip(state))]
pub async fn race_detail(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<Json<RaceDetailResponse>, AppError> {
    let repository = state.repository.as_ref();
    let (races, points) = futures::try_join!(repository.races(), repository.points())?;
    let race = races
        .iter()
        .find(|race| race.id == race_id)
        .ok_or_else(|| AppError::NotFound(format!("Race {race_id} not found")))?;

    Ok(Json(RaceDetailResponse {
        id: race.id.clone(),
        round: race.round,
        name: race.name.clone(),
        date: race.date,
        status: race.status,
        sessions: score_race(race, &points),
    }))
}

/// GET /calendar
#[instrument(name = "calendar", skip(state))]
pub async fn calendar(State(state): State<AppState>) -> Result<Json<CalendarResponse>, AppError> {
    let races = state.repository.races().await?;

    Ok(Json(CalendarResponse {
        races: league::calendar(&races)
            .into_iter()
            .map(CalendarEntry::from)
            .collect(),
        next_race_id: league::next_race(&races, Utc::now()).map(|race| race.id.clone()),
        latest_race_id: league::latest_completed(&races).map(|race| race.id.clone()),
    }))
}

/// GET /licenses
#[instrument(name = "licenses", skip(state))]
pub async fn licenses(State(state): State<AppState>) -> Result<Json<Vec<LicenseRow>>, AppError> {
    let repository = state.repository.as_ref();
    let (records, drivers) = futures::try_join!(repository.licenses(), repository.drivers())?;
    Ok(Json(license_rows(&records, &DriverCatalog::new(&drivers))))
}

/// GET /stewards?round=<n|all>
#[instrument(name = "stewards", skip(state))]
pub async fn stewards(
    State(state): State<AppState>,
    Query(query): Query<StewardsQuery>,
) -> Result<Json<StewardsResponse>, AppError> {
    let rounds = state.repository.stewards().await?;
    let filter = query.round.as_deref().unwrap_or("all");

    Ok(Json(StewardsResponse {
        options: steward_round_options(&rounds),
        rounds: filter_steward_rounds(&rounds, filter)
            .into_iter()
            .cloned()
            .collect(),
    }))
}

/// GET /history/:index/standings
///
/// Seasons are resolved in archive order so same-year blocks keep their
/// assignment.
#[instrument(name = "history_standings", skip(state))]
pub async fn history_standings(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<HistoryStandingsResponse>, AppError> {
    let repository = state.repository.as_ref();
    let (seasons, archive, points) = futures::try_join!(
        repository.seasons(),
        repository.archive(),
        repository.points(),
    )?;
    let snapshot = LeagueSnapshot {
        seasons,
        archive,
        points,
        ..LeagueSnapshot::default()
    };

    let block = snapshot
        .archive
        .seasons
        .get(index)
        .ok_or_else(|| AppError::NotFound(format!("Archived season {index} not found")))?;

    let mut resolver = SeasonResolver::new(&snapshot.seasons);
    let season_id = snapshot.archive.seasons[..=index]
        .iter()
        .map(|season| resolver.resolve(season))
        .last()
        .flatten()
        .map(|definition| definition.id.clone());

    let points = snapshot.points_for_season(season_id.as_deref());

    Ok(Json(HistoryStandingsResponse {
        index,
        standings: block.final_standings(points),
        season_id,
    }))
}
