pub mod handlers;
pub mod types;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shared::AppState;

/// Read-only JSON routes over the league data
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/standings", get(handlers::standings))
        .route("/stats", get(handlers::stats))
        .route("/stats/scopes", get(handlers::stat_scopes))
        .route("/stats/categories", get(handlers::stat_categories))
        .route("/races/:race_id", get(handlers::race_detail))
        .route("/calendar", get(handlers::calendar))
        .route("/licenses", get(handlers::licenses))
        .route("/stewards", get(handlers::stewards))
        .route("/history/:index/standings", get(handlers::history_standings))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
