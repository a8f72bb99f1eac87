use super::value_objects::TeamId;

/// Changes to the team list
///
/// Emitted by the [`Team`](super::Team) aggregate and the team roster so
/// subscribers can re-render only what changed.
///
/// # Example
/// ```
/// use roster_engine::domain::team::events::TeamEvent;
/// use roster_engine::domain::team::value_objects::TeamId;
///
/// let id = TeamId::generate();
/// let event = TeamEvent::Deleted { team_id: id.clone() };
/// assert_eq!(event.team_id(), Some(&id));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// A team was created
    Created {
        team_id: TeamId,
        name: String,
    },
    /// Every editable field of a team was replaced
    Updated {
        team_id: TeamId,
    },
    /// A team was removed
    Deleted {
        team_id: TeamId,
    },
    /// All teams were dropped, e.g. on logout
    Cleared,
}

impl TeamEvent {
    /// Returns the team this event refers to, if it refers to a single one
    pub fn team_id(&self) -> Option<&TeamId> {
        match self {
            TeamEvent::Created { team_id, .. } => Some(team_id),
            TeamEvent::Updated { team_id } => Some(team_id),
            TeamEvent::Deleted { team_id } => Some(team_id),
            TeamEvent::Cleared => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_has_no_team() {
        assert_eq!(TeamEvent::Cleared.team_id(), None);
    }

    #[test]
    fn updated_carries_team_id() {
        let team_id = TeamId::from("abc");
        let event = TeamEvent::Updated {
            team_id: team_id.clone(),
        };

        assert_eq!(event.team_id(), Some(&team_id));
    }
}
