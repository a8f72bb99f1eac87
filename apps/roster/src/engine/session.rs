use std::sync::Arc;

use tokio::sync::Mutex;

use super::events::{EventBus, StateEvent};
use crate::domain::repositories::SessionRepository;
use crate::domain::session::Session;

/// Holder of the authentication flag and username
///
/// Performs no validation: callers check the username (see
/// [`Username`](crate::domain::session::Username)) before logging in.
pub struct SessionStore {
    session: Mutex<Session>,
    repo: Arc<dyn SessionRepository>,
    events: EventBus,
}

impl SessionStore {
    pub fn new(repo: Arc<dyn SessionRepository>, events: EventBus) -> Self {
        Self {
            session: Mutex::new(Session::default()),
            repo,
            events,
        }
    }

    /// Loads the stored session, keeping the signed-out default when the
    /// record is missing or unreadable
    pub async fn restore(&self) {
        match self.repo.load_session().await {
            Ok(Some(stored)) => {
                tracing::info!(authenticated = stored.is_authenticated, "session restored");
                *self.session.lock().await = stored;
            }
            Ok(None) => tracing::debug!("no stored session"),
            Err(e) => tracing::warn!(error = %e, "ignoring stored session"),
        }
    }

    pub async fn login(&self, username: &str) {
        self.replace(Session::signed_in(username)).await;
        tracing::info!(username, "logged in");
    }

    /// Clears the flag and username; teams are cleared by the caller
    pub async fn logout(&self) {
        self.replace(Session::signed_out()).await;
        tracing::info!("logged out");
    }

    async fn replace(&self, next: Session) {
        let mut session = self.session.lock().await;
        *session = next;
        if let Err(e) = self.repo.save_session(&session).await {
            tracing::error!(error = %e, "failed to save session");
        }
        self.events.publish(StateEvent::SessionChanged {
            is_authenticated: session.is_authenticated,
        });
    }

    pub async fn current(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.is_authenticated
    }

    pub async fn username(&self) -> Option<String> {
        self.session.lock().await.username.clone()
    }
}
