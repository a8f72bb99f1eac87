use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::records::{decode, encode, AUTH_KEY, TEAMS_KEY};
use crate::domain::repositories::errors::StorageResult;
use crate::domain::repositories::{SessionRepository, TeamRepository};
use crate::domain::session::Session;
use crate::domain::team::Team;

/// Key-value store held in process memory
///
/// Keeps records as raw JSON strings, like browser local storage, so
/// malformed records can be seeded and inspected.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under `key`, bypassing serialization
    pub fn set_raw(&self, key: &str, raw: impl Into<String>) {
        self.lock().insert(key.to_string(), raw.into());
    }

    /// Raw text stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn load_session(&self) -> StorageResult<Option<Session>> {
        decode(self.raw(AUTH_KEY))
    }

    async fn save_session(&self, session: &Session) -> StorageResult<()> {
        let raw = encode(session)?;
        self.set_raw(AUTH_KEY, raw);
        Ok(())
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn load_teams(&self) -> StorageResult<Option<Vec<Team>>> {
        decode(self.raw(TEAMS_KEY))
    }

    async fn save_teams(&self, teams: &[Team]) -> StorageResult<()> {
        let raw = encode(teams)?;
        self.set_raw(TEAMS_KEY, raw);
        Ok(())
    }
}
