use async_trait::async_trait;

use super::errors::StorageResult;
use crate::domain::session::Session;

/// Repository for the `auth` record
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Load the stored session, `None` if nothing was ever saved
    async fn load_session(&self) -> StorageResult<Option<Session>>;

    /// Overwrite the stored session
    async fn save_session(&self, session: &Session) -> StorageResult<()>;
}
