use std::sync::Arc;

use tokio::sync::Mutex;

use super::events::{EventBus, StateEvent};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamDraft, TeamError, TeamEvent, TeamId};

/// Owner of the user-created team list
///
/// Every mutation is saved before the call returns. The list lock is held
/// across the save so stored snapshots land in mutation order.
///
/// Form validation is the caller's job. The roster only refuses drafts that
/// would break membership exclusivity or roster capacity.
pub struct TeamRoster {
    teams: Mutex<Vec<Team>>,
    repo: Arc<dyn TeamRepository>,
    events: EventBus,
}

impl TeamRoster {
    pub fn new(repo: Arc<dyn TeamRepository>, events: EventBus) -> Self {
        Self {
            teams: Mutex::new(Vec::new()),
            repo,
            events,
        }
    }

    /// Loads the stored list, keeping the empty default when the record is
    /// missing or unreadable
    pub async fn restore(&self) {
        match self.repo.load_teams().await {
            Ok(Some(stored)) => {
                tracing::info!(count = stored.len(), "teams restored");
                *self.teams.lock().await = stored;
            }
            Ok(None) => tracing::debug!("no stored teams"),
            Err(e) => tracing::warn!(error = %e, "ignoring stored teams"),
        }
    }

    /// Creates a team with a fresh id and timestamp
    pub async fn add_team(&self, draft: TeamDraft) -> Result<Team, TeamError> {
        let mut teams = self.teams.lock().await;
        check_exclusive(&teams, &draft, None)?;

        let (team, event) = Team::create(draft)?;
        tracing::info!(team_id = %team.id(), name = team.name(), "team created");
        teams.push(team.clone());

        self.persist(&teams).await;
        self.events.publish(StateEvent::Team(event));
        Ok(team)
    }

    /// Replaces every field of team `id` except its id and creation time
    ///
    /// Returns `Ok(None)` without saving when no team has that id.
    pub async fn update_team(
        &self,
        id: &TeamId,
        draft: TeamDraft,
    ) -> Result<Option<Team>, TeamError> {
        let mut teams = self.teams.lock().await;
        let Some(index) = teams.iter().position(|t| t.id() == id) else {
            tracing::debug!(team_id = %id, "update ignored, no such team");
            return Ok(None);
        };
        check_exclusive(&teams, &draft, Some(id))?;

        let event = teams[index].replace(draft)?;
        let updated = teams[index].clone();
        tracing::info!(team_id = %id, "team updated");

        self.persist(&teams).await;
        self.events.publish(StateEvent::Team(event));
        Ok(Some(updated))
    }

    /// Removes team `id`, returning it; no-op when absent
    pub async fn delete_team(&self, id: &TeamId) -> Option<Team> {
        let mut teams = self.teams.lock().await;
        let index = teams.iter().position(|t| t.id() == id)?;
        let removed = teams.remove(index);
        tracing::info!(team_id = %id, "team deleted");

        self.persist(&teams).await;
        self.events.publish(StateEvent::Team(TeamEvent::Deleted {
            team_id: id.clone(),
        }));
        Some(removed)
    }

    /// Drops every team
    pub async fn clear(&self) {
        let mut teams = self.teams.lock().await;
        teams.clear();

        self.persist(&teams).await;
        self.events.publish(StateEvent::Team(TeamEvent::Cleared));
    }

    pub async fn is_player_in_team(&self, player_id: u64) -> bool {
        self.teams.lock().await.iter().any(|t| t.has_player(player_id))
    }

    /// First team in creation order whose roster holds `player_id`
    pub async fn get_team_by_player(&self, player_id: u64) -> Option<Team> {
        self.teams
            .lock()
            .await
            .iter()
            .find(|t| t.has_player(player_id))
            .cloned()
    }

    pub async fn get_team(&self, id: &TeamId) -> Option<Team> {
        self.teams.lock().await.iter().find(|t| t.id() == id).cloned()
    }

    /// Copy of the team list in creation order
    pub async fn teams(&self) -> Vec<Team> {
        self.teams.lock().await.clone()
    }

    /// Runs `f` over the team list without copying it
    pub async fn with_teams<R>(&self, f: impl FnOnce(&[Team]) -> R) -> R {
        f(&self.teams.lock().await)
    }

    async fn persist(&self, teams: &[Team]) {
        if let Err(e) = self.repo.save_teams(teams).await {
            tracing::error!(error = %e, "failed to save teams");
        }
    }
}

/// Rejects a draft listing a player who already plays for another team
fn check_exclusive(
    teams: &[Team],
    draft: &TeamDraft,
    editing: Option<&TeamId>,
) -> Result<(), TeamError> {
    for player in &draft.players {
        let owner = teams
            .iter()
            .filter(|t| Some(t.id()) != editing)
            .find(|t| t.has_player(player.id));
        if let Some(owner) = owner {
            return Err(TeamError::PlayerAlreadyAssigned {
                player_id: player.id,
                team_id: owner.id().clone(),
            });
        }
    }
    Ok(())
}
