use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Smallest roster capacity a team may declare
pub const MIN_PLAYER_COUNT: u32 = 1;

/// Largest roster capacity a team may declare
pub const MAX_PLAYER_COUNT: u32 = 50;

/// Opaque team identifier
///
/// Generated once when a team is created and never reassigned. Stored as a
/// plain string so records written by other clients load as-is.
///
/// # Example
/// ```
/// use roster_engine::domain::team::value_objects::TeamId;
///
/// let a = TeamId::generate();
/// let b = TeamId::generate();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    /// Creates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TeamId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true if `count` is an allowed roster capacity
pub fn is_valid_player_count(count: u32) -> bool {
    (MIN_PLAYER_COUNT..=MAX_PLAYER_COUNT).contains(&count)
}
