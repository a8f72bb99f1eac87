use async_trait::async_trait;

use super::errors::StorageResult;
use crate::domain::team::Team;

/// Repository for the `teams` record
///
/// The whole list is stored as one value; every save overwrites it.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Load the stored team list, `None` if nothing was ever saved
    async fn load_teams(&self) -> StorageResult<Option<Vec<Team>>>;

    /// Overwrite the stored team list
    async fn save_teams(&self, teams: &[Team]) -> StorageResult<()>;
}
