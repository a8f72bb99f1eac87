use serde::{Deserialize, Serialize};

/// Player as delivered by the upstream league API
///
/// Players are read-only to the engine: they are created by the pager and
/// never edited or removed. Fields the upstream API leaves `null` are kept
/// as `None` so a stored roster round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub team: LeagueTeam,
}

/// The professional team a player is signed to upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTeam {
    pub id: u64,
    pub full_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
}

impl Player {
    /// Returns "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
