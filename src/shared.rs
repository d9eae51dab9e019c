use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::data::{DataError, LeagueRepository};
use crate::stats::{StatsAggregator, StatsError};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn LeagueRepository + Send + Sync>,
    pub aggregator: Arc<StatsAggregator>,
    pub top_n: usize,
}

impl AppState {
    pub fn new(repository: Arc<dyn LeagueRepository + Send + Sync>, top_n: usize) -> Self {
        Self {
            repository,
            aggregator: Arc::new(StatsAggregator::builder().build()),
            top_n,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Stats(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AppError::Data(err) => {
                error!(error = %err, "Failed to load league data");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
