use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::player::Player;

/// Failures reported by an upstream player source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Upstream rate limit hit")]
    RateLimited,

    #[error("Upstream request failed with status {0}")]
    Status(u16),

    #[error("Upstream transport error: {0}")]
    Transport(String),

    #[error("Upstream response could not be decoded: {0}")]
    Decode(String),
}

/// One page of the upstream player listing
///
/// A body without `data` decodes as an empty page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerPage {
    #[serde(default)]
    pub data: Vec<Player>,
}

/// Source of paged player data
#[async_trait]
pub trait PlayerSource: Send + Sync {
    /// Fetch up to `per_page` players starting at offset `cursor`
    async fn fetch_page(&self, cursor: u64, per_page: u32) -> Result<PlayerPage, SourceError>;
}
