use std::sync::Arc;

use tokio::sync::broadcast;

use super::events::{EventBus, StateEvent};
use super::pager::{FetchOutcome, PagerStatus, PlayerPager};
use super::session::SessionStore;
use super::summary::{available_players, RosterSummary};
use super::teams::TeamRoster;
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerSource, SessionRepository, TeamRepository};
use crate::domain::session::Session;
use crate::domain::team::{Team, TeamDraft, TeamError, TeamId};

/// Application state container
///
/// Built once at startup and passed by reference to every consumer. Owns
/// the session, the fetched players and the team list; views only read
/// snapshots and call the operations below.
///
/// Dropping the container (or calling [`shutdown`](Self::shutdown)) aborts
/// any pending rate-limit cool-down.
pub struct AppState {
    session: SessionStore,
    pager: PlayerPager,
    teams: TeamRoster,
    events: EventBus,
}

impl AppState {
    /// Creates an empty container without touching storage
    pub fn new(
        source: Arc<dyn PlayerSource>,
        sessions: Arc<dyn SessionRepository>,
        teams: Arc<dyn TeamRepository>,
    ) -> Self {
        let events = EventBus::new();
        Self {
            session: SessionStore::new(sessions, events.clone()),
            pager: PlayerPager::new(source, events.clone()),
            teams: TeamRoster::new(teams, events.clone()),
            events,
        }
    }

    /// Creates the container and loads the stored session and teams
    ///
    /// Missing or malformed records leave the defaults in place.
    pub async fn restore(
        source: Arc<dyn PlayerSource>,
        sessions: Arc<dyn SessionRepository>,
        teams: Arc<dyn TeamRepository>,
    ) -> Self {
        let state = Self::new(source, sessions, teams);
        state.session.restore().await;
        state.teams.restore().await;
        state
    }

    // ===== Session =====

    pub async fn login(&self, username: &str) {
        self.session.login(username).await;
    }

    /// Signs out and drops every team
    pub async fn logout(&self) {
        self.session.logout().await;
        self.teams.clear().await;
    }

    pub async fn session(&self) -> Session {
        self.session.current().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.is_authenticated().await
    }

    pub async fn username(&self) -> Option<String> {
        self.session.username().await
    }

    // ===== Players =====

    /// See [`PlayerPager::fetch_players`]
    pub async fn fetch_players(&self) -> FetchOutcome {
        self.pager.fetch_players().await
    }

    pub fn players(&self) -> Vec<Player> {
        self.pager.players()
    }

    pub fn pager_status(&self) -> PagerStatus {
        self.pager.status()
    }

    // ===== Teams =====

    pub async fn add_team(&self, draft: TeamDraft) -> Result<Team, TeamError> {
        self.teams.add_team(draft).await
    }

    pub async fn update_team(
        &self,
        id: &TeamId,
        draft: TeamDraft,
    ) -> Result<Option<Team>, TeamError> {
        self.teams.update_team(id, draft).await
    }

    pub async fn delete_team(&self, id: &TeamId) -> Option<Team> {
        self.teams.delete_team(id).await
    }

    pub async fn is_player_in_team(&self, player_id: u64) -> bool {
        self.teams.is_player_in_team(player_id).await
    }

    /// First team in creation order whose roster holds `player_id`
    pub async fn get_team_by_player(&self, player_id: u64) -> Option<Team> {
        self.teams.get_team_by_player(player_id).await
    }

    pub async fn get_team(&self, id: &TeamId) -> Option<Team> {
        self.teams.get_team(id).await
    }

    pub async fn teams(&self) -> Vec<Team> {
        self.teams.teams().await
    }

    // ===== Queries =====

    /// Fetched players a team form may offer; see [`super::summary::available_players`]
    pub async fn available_players(&self, editing: Option<&TeamId>) -> Vec<Player> {
        self.teams
            .with_teams(|teams| {
                self.pager
                    .with_players(|players| available_players(players, teams, editing))
            })
            .await
    }

    pub async fn summary(&self) -> RosterSummary {
        self.teams
            .with_teams(|teams| {
                self.pager
                    .with_players(|players| RosterSummary::compute(players, teams))
            })
            .await
    }

    // ===== Lifecycle =====

    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.events.subscribe()
    }

    /// Stops the pager; session and team operations keep working
    pub fn shutdown(&self) {
        tracing::info!("shutting down roster state");
        self.pager.shutdown();
    }
}
