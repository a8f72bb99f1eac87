//! Integration tests for the file-backed store
//!
//! These tests verify that session and team records survive a restart of
//! the state container and that damaged files fall back to defaults.

use std::sync::Arc;

use async_trait::async_trait;
use roster_engine::domain::player::{LeagueTeam, Player};
use roster_engine::domain::repositories::{
    PlayerPage, PlayerSource, SessionRepository, SourceError, TeamRepository,
};
use roster_engine::domain::session::{Session, Username};
use roster_engine::domain::team::TeamDraft;
use roster_engine::engine::AppState;
use roster_engine::infrastructure::repositories::JsonFileStore;
use tempfile::TempDir;

/// Source that never has players; persistence tests do not page
struct NoPlayers;

#[async_trait]
impl PlayerSource for NoPlayers {
    async fn fetch_page(&self, _cursor: u64, _per_page: u32) -> Result<PlayerPage, SourceError> {
        Ok(PlayerPage::default())
    }
}

fn player(id: u64) -> Player {
    Player {
        id,
        first_name: "Test".to_string(),
        last_name: format!("Player{}", id),
        position: Some("C".to_string()),
        height: None,
        weight: Some("250".to_string()),
        jersey_number: None,
        college: Some("Georgetown".to_string()),
        country: Some("USA".to_string()),
        team: LeagueTeam {
            id: 20,
            full_name: "New York Knicks".to_string(),
            city: Some("New York".to_string()),
            conference: Some("East".to_string()),
        },
    }
}

fn draft(name: &str, ids: &[u64]) -> TeamDraft {
    TeamDraft {
        name: name.to_string(),
        player_count: 5,
        region: "Atlantic".to_string(),
        country: "USA".to_string(),
        players: ids.iter().copied().map(player).collect(),
    }
}

async fn open(dir: &TempDir) -> AppState {
    let store = Arc::new(JsonFileStore::new(dir.path()));
    AppState::restore(Arc::new(NoPlayers), store.clone(), store).await
}

#[tokio::test]
async fn test_empty_directory_starts_signed_out() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir).await;

    assert!(!state.is_authenticated().await);
    assert!(state.teams().await.is_empty());
}

#[tokio::test]
async fn test_team_list_round_trips_through_files() {
    let dir = TempDir::new().unwrap();
    let before = {
        let state = open(&dir).await;
        state.add_team(draft("Knicks", &[33, 34])).await.unwrap();
        state.add_team(draft("Nets", &[])).await.unwrap();
        state.teams().await
    };

    let after = open(&dir).await.teams().await;

    assert_eq!(after, before);
    assert_eq!(after[0].players()[0].weight.as_deref(), Some("250"));
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let state = open(&dir).await;
        let name = Username::new("  ewing ").unwrap();
        state.login(name.as_str()).await;
    }

    let state = open(&dir).await;

    assert_eq!(state.session().await, Session::signed_in("ewing"));
}

#[tokio::test]
async fn test_logout_persists_cleared_state() {
    let dir = TempDir::new().unwrap();
    {
        let state = open(&dir).await;
        state.login("ewing").await;
        state.add_team(draft("Knicks", &[33])).await.unwrap();
        state.logout().await;
    }

    let state = open(&dir).await;

    assert!(!state.is_authenticated().await);
    assert!(state.teams().await.is_empty());
}

#[tokio::test]
async fn test_corrupt_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("auth.json"), "{\"isAuthenticated\":").unwrap();
    std::fs::write(dir.path().join("teams.json"), "[1, 2, 3]").unwrap();

    let state = open(&dir).await;

    assert!(!state.is_authenticated().await);
    assert!(state.teams().await.is_empty());

    // The next mutation overwrites the damaged record
    state.add_team(draft("Knicks", &[])).await.unwrap();
    let store = JsonFileStore::new(dir.path());
    assert_eq!(store.load_teams().await.unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn test_store_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = JsonFileStore::new(&nested);

    store.save_session(&Session::signed_in("reed")).await.unwrap();

    assert!(nested.join("auth.json").exists());
    assert_eq!(
        store.load_session().await.unwrap(),
        Some(Session::signed_in("reed"))
    );
}
