use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use league_standings::{
    api,
    league::{ArchiveSeason, Driver, LeagueArchive, PointsConfig, Race, SeasonDefinition},
    AppState, InMemoryLeagueRepository, LeagueSnapshot,
};

use super::league_builders::f1_points;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub repository: Arc<InMemoryLeagueRepository>,
    pub app: Router,
}

impl TestSetup {
    /// Issues a GET against the full router and decodes the JSON body
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn publish_races(&self, races: Vec<Race>) {
        self.repository.replace_races(races).await;
    }
}

pub struct TestSetupBuilder {
    snapshot: LeagueSnapshot,
    top_n: usize,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: LeagueSnapshot {
                points: f1_points(3),
                ..LeagueSnapshot::default()
            },
            top_n: 10,
        }
    }

    pub fn with_drivers(mut self, drivers: &[(&str, &str)]) -> Self {
        self.snapshot.drivers = drivers
            .iter()
            .map(|(id, name)| Driver {
                id: id.to_string(),
                name: name.to_string(),
                ..Driver::default()
            })
            .collect();
        self
    }

    pub fn with_points(mut self, points: PointsConfig) -> Self {
        self.snapshot.points = points;
        self
    }

    pub fn with_races(mut self, races: Vec<Race>) -> Self {
        self.snapshot.races = races;
        self
    }

    pub fn with_seasons(mut self, seasons: Vec<SeasonDefinition>) -> Self {
        self.snapshot.seasons = seasons;
        self
    }

    pub fn with_archive(mut self, seasons: Vec<ArchiveSeason>) -> Self {
        self.snapshot.archive = LeagueArchive { seasons };
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryLeagueRepository::with_snapshot(self.snapshot));
        let app = api::router(AppState::new(repository.clone(), self.top_n));
        TestSetup { repository, app }
    }
}
