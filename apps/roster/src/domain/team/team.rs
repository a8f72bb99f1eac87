use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::events::TeamEvent;
use super::value_objects::TeamId;
use crate::domain::player::Player;

/// Structural rule violations the roster refuses to store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Roster has {players} players but capacity is {capacity}")]
    OverCapacity { players: usize, capacity: u32 },

    #[error("Player {0} is listed more than once")]
    DuplicatePlayer(u64),

    #[error("Player {player_id} already plays for team {team_id}")]
    PlayerAlreadyAssigned { player_id: u64, team_id: TeamId },
}

/// Caller-supplied team fields
///
/// Used both to create a team and to replace an existing team's fields.
/// Form validation lives in [`TeamDraft::validate`](super::validation); the
/// roster only re-checks the structural rules in [`TeamDraft::check_roster`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDraft {
    pub name: String,
    pub player_count: u32,
    pub region: String,
    pub country: String,
    pub players: Vec<Player>,
}

impl TeamDraft {
    /// Checks roster size against capacity and rejects repeated players
    pub fn check_roster(&self) -> Result<(), TeamError> {
        if self.players.len() > self.player_count as usize {
            return Err(TeamError::OverCapacity {
                players: self.players.len(),
                capacity: self.player_count,
            });
        }

        let mut seen = HashSet::with_capacity(self.players.len());
        for player in &self.players {
            if !seen.insert(player.id) {
                return Err(TeamError::DuplicatePlayer(player.id));
            }
        }

        Ok(())
    }

    /// Returns a copy with name, region and country trimmed
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            player_count: self.player_count,
            region: self.region.trim().to_string(),
            country: self.country.trim().to_string(),
            players: self.players.clone(),
        }
    }
}

/// User-created team
///
/// # Invariants
/// - `id` and `created_at` never change after creation
/// - Roster never holds more players than `player_count`
/// - A player id appears at most once in the roster
///
/// # Example
/// ```
/// use roster_engine::domain::team::{Team, TeamDraft};
///
/// let (team, _event) = Team::create(TeamDraft {
///     name: "Night Owls".to_string(),
///     player_count: 5,
///     region: "Pacific".to_string(),
///     country: "USA".to_string(),
///     players: vec![],
/// })
/// .expect("valid team");
///
/// assert_eq!(team.name(), "Night Owls");
/// assert!(team.players().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    id: TeamId,
    name: String,
    player_count: u32,
    region: String,
    country: String,
    players: Vec<Player>,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a team with a fresh id and the current timestamp
    pub fn create(draft: TeamDraft) -> Result<(Self, TeamEvent), TeamError> {
        draft.check_roster()?;

        let team = Self {
            id: TeamId::generate(),
            name: draft.name,
            player_count: draft.player_count,
            region: draft.region,
            country: draft.country,
            players: draft.players,
            created_at: Utc::now(),
        };

        let event = TeamEvent::Created {
            team_id: team.id.clone(),
            name: team.name.clone(),
        };

        Ok((team, event))
    }

    /// Replaces every field except `id` and `created_at`
    pub fn replace(&mut self, draft: TeamDraft) -> Result<TeamEvent, TeamError> {
        draft.check_roster()?;

        self.name = draft.name;
        self.player_count = draft.player_count;
        self.region = draft.region;
        self.country = draft.country;
        self.players = draft.players;

        Ok(TeamEvent::Updated {
            team_id: self.id.clone(),
        })
    }

    /// Returns true if the roster contains `player_id`
    pub fn has_player(&self, player_id: u64) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Returns the editable fields as a draft, for pre-filling a form
    pub fn to_draft(&self) -> TeamDraft {
        TeamDraft {
            name: self.name.clone(),
            player_count: self.player_count,
            region: self.region.clone(),
            country: self.country.clone(),
            players: self.players.clone(),
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Roster capacity
    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Open roster spots
    pub fn open_slots(&self) -> usize {
        (self.player_count as usize).saturating_sub(self.players.len())
    }
}
