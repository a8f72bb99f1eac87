use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::repositories::errors::StorageResult;

/// Storage key of the session record
pub const AUTH_KEY: &str = "auth";

/// Storage key of the team list record
pub const TEAMS_KEY: &str = "teams";

pub(crate) fn decode<T: DeserializeOwned>(raw: Option<String>) -> StorageResult<Option<T>> {
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> StorageResult<String> {
    Ok(serde_json::to_string(value)?)
}
