use std::collections::HashSet;

use crate::domain::player::Player;
use crate::domain::team::{Team, TeamId};

/// Dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub total_teams: usize,
    /// Distinct players on any roster
    pub assigned_players: usize,
    /// Fetched players minus assigned ones, never below zero
    pub available_players: usize,
    pub total_players: usize,
}

impl RosterSummary {
    pub fn compute(players: &[Player], teams: &[Team]) -> Self {
        let assigned: HashSet<u64> = teams
            .iter()
            .flat_map(|t| t.players().iter().map(|p| p.id))
            .collect();

        Self {
            total_teams: teams.len(),
            assigned_players: assigned.len(),
            available_players: players.len().saturating_sub(assigned.len()),
            total_players: players.len(),
        }
    }
}

/// Players a team form may pick from
///
/// Everyone not on a roster, plus the members of `editing` so an edit can
/// keep its own players. Fetch order is preserved.
pub fn available_players(
    players: &[Player],
    teams: &[Team],
    editing: Option<&TeamId>,
) -> Vec<Player> {
    players
        .iter()
        .filter(|p| {
            teams
                .iter()
                .find(|t| t.has_player(p.id))
                .map_or(true, |owner| Some(owner.id()) == editing)
        })
        .cloned()
        .collect()
}
