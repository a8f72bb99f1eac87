use tokio::sync::broadcast;

use super::pager::PagerStatus;
use crate::domain::team::TeamEvent;

const EVENT_BUFFER: usize = 64;

/// Notification that part of the application state changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Login or logout happened
    SessionChanged { is_authenticated: bool },
    /// Pager flags or error changed
    PagerChanged(PagerStatus),
    /// A page of players was appended
    PlayersAppended { count: usize, total: usize },
    /// The team list changed
    Team(TeamEvent),
}

/// Fan-out of [`StateEvent`]s to any number of views
///
/// Publishing never blocks and never fails; with no subscribers the event is
/// simply dropped. Slow subscribers see `RecvError::Lagged` and should
/// re-read the full state.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StateEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_BUFFER);
        Self { tx }
    }

    pub fn publish(&self, event: StateEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
