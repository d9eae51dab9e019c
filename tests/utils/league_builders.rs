//! Builders for races and archive rounds used across workflow tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use league_standings::league::{
    dates::parse_instant, ArchiveRound, ArchiveSession, ArchiveSessions, PointsConfig, Race,
    RaceResult, RaceStatus, ResultStatus, Session, SessionKind,
};

// ============================================================================
// Result Helpers
// ============================================================================

pub fn finished(driver: &str, team: &str, position: u32) -> RaceResult {
    RaceResult {
        position: Some(position),
        driver_id: driver.to_string(),
        team_id: Some(team.to_string()).filter(|t| !t.is_empty()),
        status: ResultStatus::Finished,
        ..RaceResult::default()
    }
}

pub fn with_fastest_lap(mut result: RaceResult) -> RaceResult {
    result.fastest_lap = true;
    result
}

pub fn retired(driver: &str, team: &str, status: ResultStatus) -> RaceResult {
    RaceResult {
        position: None,
        driver_id: driver.to_string(),
        team_id: Some(team.to_string()).filter(|t| !t.is_empty()),
        status,
        ..RaceResult::default()
    }
}

/// Standard F1-style tables with a fastest-lap bonus only for scorers
pub fn f1_points(season: u32) -> PointsConfig {
    PointsConfig {
        feature_points: vec![25, 18, 15, 12, 10, 8, 6, 4, 2, 1],
        sprint_points: vec![8, 7, 6, 5, 4, 3, 2, 1],
        fastest_lap_bonus: 1,
        fastest_lap_only_if_points: true,
        season,
        name: None,
    }
}

// ============================================================================
// Race Builder
// ============================================================================

pub struct RaceBuilder {
    race: Race,
}

impl RaceBuilder {
    pub fn new(id: &str, round: u32) -> Self {
        Self {
            race: Race {
                id: id.to_string(),
                round,
                name: format!("Round {round}"),
                ..Race::default()
            },
        }
    }

    pub fn on(mut self, date: &str) -> Self {
        self.race.date = parse_instant(date);
        self
    }

    pub fn completed(mut self) -> Self {
        self.race.status = RaceStatus::Completed;
        self
    }

    pub fn session(mut self, kind: SessionKind, results: Vec<RaceResult>) -> Self {
        let session = Some(Session::new(results));
        match kind {
            SessionKind::Sprint => self.race.sessions.sprint = session,
            SessionKind::Feature => self.race.sessions.feature = session,
        }
        self
    }

    pub fn feature(self, results: Vec<RaceResult>) -> Self {
        self.session(SessionKind::Feature, results)
    }

    pub fn sprint(self, results: Vec<RaceResult>) -> Self {
        self.session(SessionKind::Sprint, results)
    }

    pub fn build(self) -> Race {
        self.race
    }
}

// ============================================================================
// Archive Round Builder
// ============================================================================

pub struct ArchiveRoundBuilder {
    round: ArchiveRound,
}

impl ArchiveRoundBuilder {
    pub fn new(round: u32) -> Self {
        Self {
            round: ArchiveRound {
                round,
                ..ArchiveRound::default()
            },
        }
    }

    /// Flat result list, read as a feature-only race
    pub fn results(mut self, results: Vec<RaceResult>) -> Self {
        self.round.results = results;
        self
    }

    pub fn sessions(mut self, sprint: Vec<RaceResult>, feature: Vec<RaceResult>) -> Self {
        self.round.sessions = Some(ArchiveSessions {
            sprint: Some(ArchiveSession {
                results: Some(sprint),
            }),
            feature: Some(ArchiveSession {
                results: Some(feature),
            }),
        });
        self
    }

    pub fn fastest_lap(mut self, driver: &str) -> Self {
        self.round.fastest_lap = Some(driver.to_string());
        self
    }

    pub fn special_event(mut self, drivers: &[&str]) -> Self {
        self.round.special_event = drivers.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn build(self) -> ArchiveRound {
        self.round
    }
}
