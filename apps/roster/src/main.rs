use std::sync::Arc;

use roster_engine::config::Config;
use roster_engine::engine::{AppState, FetchOutcome};
use roster_engine::infrastructure::repositories::JsonFileStore;
use roster_engine::infrastructure::HttpPlayerSource;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let source = match HttpPlayerSource::new(
        &config.api_base_url,
        &config.api_key,
        config.http_timeout,
    ) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    tracing::info!(dir = %config.data_dir.display(), "restoring state");
    let store = Arc::new(JsonFileStore::new(&config.data_dir));
    let state = AppState::restore(source, store.clone(), store).await;

    match state.username().await {
        Some(name) if state.is_authenticated().await => {
            tracing::info!(username = %name, "session active")
        }
        _ => tracing::info!("no active session"),
    }

    match state.fetch_players().await {
        FetchOutcome::Appended { count } | FetchOutcome::Finished { count } => {
            tracing::info!(count, "players fetched")
        }
        outcome => {
            let status = state.pager_status();
            tracing::warn!(?outcome, error = ?status.error, "no players fetched");
        }
    }

    let summary = state.summary().await;
    tracing::info!(
        teams = summary.total_teams,
        assigned = summary.assigned_players,
        available = summary.available_players,
        players = summary.total_players,
        "roster summary"
    );

    state.shutdown();
}
