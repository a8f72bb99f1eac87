use std::collections::BTreeMap;
use std::fmt;

use super::team::{Team, TeamDraft};
use super::value_objects::{is_valid_player_count, TeamId};

/// Field-level messages for the team form
///
/// Keys are the serialized field names (`name`, `playerCount`, `region`,
/// `country`, `players`) so a view can attach each message to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message attached to `field`, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl TeamDraft {
    /// Validates the draft the way the team form does
    ///
    /// `editing` names the team being edited; it is excluded from the
    /// name-uniqueness check. Comparison is case-insensitive on the trimmed
    /// name.
    ///
    /// # Example
    /// ```
    /// use roster_engine::domain::team::TeamDraft;
    ///
    /// let draft = TeamDraft {
    ///     name: " ".to_string(),
    ///     player_count: 0,
    ///     region: "West".to_string(),
    ///     country: "USA".to_string(),
    ///     players: vec![],
    /// };
    ///
    /// let errors = draft.validate(&[], None).unwrap_err();
    /// assert_eq!(errors.get("name"), Some("Team name is required"));
    /// assert!(errors.get("playerCount").is_some());
    /// ```
    pub fn validate(
        &self,
        teams: &[Team],
        editing: Option<&TeamId>,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Team name is required");
        } else {
            let lowered = name.to_lowercase();
            let clash = teams
                .iter()
                .filter(|t| Some(t.id()) != editing)
                .any(|t| t.name().trim().to_lowercase() == lowered);
            if clash {
                errors.add("name", "Team name must be unique");
            }
        }

        if !is_valid_player_count(self.player_count) {
            errors.add("playerCount", "Player count must be between 1 and 50");
        }

        if self.region.trim().is_empty() {
            errors.add("region", "Region is required");
        }

        if self.country.trim().is_empty() {
            errors.add("country", "Country is required");
        }

        if self.players.len() > self.player_count as usize {
            errors.add("players", "Too many players selected");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{draft, player};

    fn existing(name: &str) -> Team {
        Team::create(draft(name, 5, vec![])).unwrap().0
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft("Hawks", 5, vec![]).validate(&[], None).is_ok());
    }

    #[test]
    fn name_clash_is_case_insensitive() {
        let teams = vec![existing("Hawks")];

        let errors = draft("  hAWKS ", 5, vec![]).validate(&teams, None).unwrap_err();

        assert_eq!(errors.get("name"), Some("Team name must be unique"));
    }

    #[test]
    fn edited_team_does_not_clash_with_itself() {
        let teams = vec![existing("Hawks")];
        let id = teams[0].id().clone();

        assert!(draft("HAWKS", 5, vec![]).validate(&teams, Some(&id)).is_ok());
    }

    #[test]
    fn edited_team_still_clashes_with_others() {
        let teams = vec![existing("Hawks"), existing("Falcons")];
        let id = teams[1].id().clone();

        let errors = draft("hawks", 5, vec![]).validate(&teams, Some(&id)).unwrap_err();

        assert!(errors.get("name").is_some());
    }

    #[test]
    fn reports_every_failing_field() {
        let mut d = draft("", 51, vec![]);
        d.region = "  ".to_string();
        d.country = String::new();

        let errors = d.validate(&[], None).unwrap_err();

        assert_eq!(errors.get("name"), Some("Team name is required"));
        assert_eq!(
            errors.get("playerCount"),
            Some("Player count must be between 1 and 50")
        );
        assert_eq!(errors.get("region"), Some("Region is required"));
        assert_eq!(errors.get("country"), Some("Country is required"));
    }

    #[test]
    fn roster_larger_than_capacity_is_flagged() {
        let errors = draft("Hawks", 1, vec![player(1), player(2)])
            .validate(&[], None)
            .unwrap_err();

        assert_eq!(errors.get("players"), Some("Too many players selected"));
    }

    #[test]
    fn display_joins_messages() {
        let errors = draft("", 5, vec![]).validate(&[], None).unwrap_err();
        assert_eq!(errors.to_string(), "name: Team name is required");
    }
}
