use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::records::{decode, encode, AUTH_KEY, TEAMS_KEY};
use crate::domain::repositories::errors::StorageResult;
use crate::domain::repositories::{SessionRepository, TeamRepository};
use crate::domain::session::Session;
use crate::domain::team::Team;

/// File-backed implementation of the session and team repositories
///
/// Each record lives in `<dir>/<key>.json`. Writes go to a temporary file
/// that is then renamed over the record so a crash never leaves half a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    async fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, raw: String) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &target).await?;
        tracing::debug!(path = %target.display(), "record saved");
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for JsonFileStore {
    async fn load_session(&self) -> StorageResult<Option<Session>> {
        decode(self.read(AUTH_KEY).await?)
    }

    async fn save_session(&self, session: &Session) -> StorageResult<()> {
        self.write(AUTH_KEY, encode(session)?).await
    }
}

#[async_trait]
impl TeamRepository for JsonFileStore {
    async fn load_teams(&self) -> StorageResult<Option<Vec<Team>>> {
        decode(self.read(TEAMS_KEY).await?)
    }

    async fn save_teams(&self, teams: &[Team]) -> StorageResult<()> {
        self.write(TEAMS_KEY, encode(teams)?).await
    }
}
