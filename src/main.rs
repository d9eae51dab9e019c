use std::sync::Arc;

use league_standings::{api, AppConfig, AppState, FileLeagueRepository};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "league_standings=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(
        data_dir = %config.data_dir.display(),
        top_n = config.top_n,
        "Starting league standings server"
    );

    let repository = Arc::new(FileLeagueRepository::new(config.data_dir.clone()));
    let app = api::router(AppState::new(repository, config.top_n));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
