// Session domain module
// Who is signed in; persisted under the `auth` storage key

pub mod value_objects;

pub use value_objects::Username;

use serde::{Deserialize, Serialize};

/// Authentication state of the current client
///
/// Serialized as `{ "isAuthenticated": bool, "username": string | null }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,
    pub username: Option<String>,
}

impl Session {
    /// Signed-in session for `username`
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            username: Some(username.into()),
        }
    }

    /// Signed-out session
    pub fn signed_out() -> Self {
        Self::default()
    }
}
