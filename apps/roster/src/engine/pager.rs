use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::errors::PagerError;
use super::events::{EventBus, StateEvent};
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerSource, SourceError};

/// Players requested per page
pub const PAGE_SIZE: u32 = 10;

/// How long the pager refuses to fetch after the upstream answers 429
pub const RATE_LIMIT_COOLDOWN: Duration = Duration::from_secs(10);

/// Snapshot of the pager flags, for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerStatus {
    pub loading: bool,
    pub rate_limited: bool,
    pub has_more: bool,
    pub cursor: u64,
    pub error: Option<PagerError>,
    pub total_players: usize,
}

/// What a call to [`PlayerPager::fetch_players`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Nothing was requested: a fetch is in flight, the pager is cooling
    /// down, the source is exhausted or the pager was shut down
    Skipped,
    /// A full page was appended; more pages may follow
    Appended { count: usize },
    /// The final, short page was appended
    Finished { count: usize },
    /// The source returned an empty page
    Exhausted,
    /// The source answered 429; the cool-down started
    RateLimited,
    /// The request failed; a later call retries the same cursor
    Failed,
}

#[derive(Debug, Default)]
struct PagerState {
    players: Vec<Player>,
    cursor: u64,
    loading: bool,
    rate_limited: bool,
    exhausted: bool,
    stopped: bool,
    error: Option<PagerError>,
}

impl PagerState {
    fn status(&self) -> PagerStatus {
        PagerStatus {
            loading: self.loading,
            rate_limited: self.rate_limited,
            has_more: !self.exhausted,
            cursor: self.cursor,
            error: self.error,
            total_players: self.players.len(),
        }
    }
}

fn lock(state: &Mutex<PagerState>) -> MutexGuard<'_, PagerState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Clears the loading flag if the fetch future is dropped before the
/// response is applied.
///
/// Once the response has been applied under the lock the guard is disarmed,
/// so it never clears a flag set by a later request.
struct LoadingGuard<'a> {
    state: &'a Mutex<PagerState>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a Mutex<PagerState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(self.state).loading = false;
        }
    }
}

/// Incremental, single-flight fetcher of the upstream player list
///
/// # State machine
/// ```text
/// Idle -> Fetching -> Idle
/// Idle -> Fetching -> RateLimited -(cool-down)-> Idle
/// Idle -> Fetching -> Exhausted (terminal)
/// ```
///
/// The cool-down runs as a spawned task whose handle the pager keeps; it is
/// aborted by [`shutdown`](Self::shutdown) and when the pager is dropped.
pub struct PlayerPager {
    source: Arc<dyn PlayerSource>,
    state: Arc<Mutex<PagerState>>,
    cooldown: Mutex<Option<JoinHandle<()>>>,
    cooldown_period: Duration,
    events: EventBus,
}

impl PlayerPager {
    pub fn new(source: Arc<dyn PlayerSource>, events: EventBus) -> Self {
        Self::with_cooldown(source, events, RATE_LIMIT_COOLDOWN)
    }

    pub(crate) fn with_cooldown(
        source: Arc<dyn PlayerSource>,
        events: EventBus,
        cooldown_period: Duration,
    ) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(PagerState::default())),
            cooldown: Mutex::new(None),
            cooldown_period,
            events,
        }
    }

    /// Requests the next page of players
    ///
    /// Silently skipped while a request is in flight, during the rate-limit
    /// cool-down, once the source is exhausted, or after shutdown.
    pub async fn fetch_players(&self) -> FetchOutcome {
        let cursor = {
            let mut state = lock(&self.state);
            if state.loading || state.rate_limited || state.exhausted || state.stopped {
                return FetchOutcome::Skipped;
            }
            state.loading = true;
            state.error = None;
            state.cursor
        };
        let mut guard = LoadingGuard::new(&self.state);

        tracing::debug!(cursor, per_page = PAGE_SIZE, "fetching players");
        let result = self.source.fetch_page(cursor, PAGE_SIZE).await;

        let (outcome, status) = {
            let mut state = lock(&self.state);
            state.loading = false;
            guard.disarm();
            let outcome = match result {
                Ok(page) if page.data.is_empty() => {
                    tracing::info!(total = state.players.len(), "player list exhausted");
                    state.exhausted = true;
                    FetchOutcome::Exhausted
                }
                Ok(page) => {
                    let count = page.data.len();
                    state.players.extend(page.data);
                    state.cursor += u64::from(PAGE_SIZE);
                    self.events.publish(StateEvent::PlayersAppended {
                        count,
                        total: state.players.len(),
                    });
                    if count < PAGE_SIZE as usize {
                        tracing::info!(count, total = state.players.len(), "final page received");
                        state.exhausted = true;
                        FetchOutcome::Finished { count }
                    } else {
                        tracing::debug!(count, next_cursor = state.cursor, "page appended");
                        FetchOutcome::Appended { count }
                    }
                }
                Err(SourceError::RateLimited) => {
                    tracing::warn!(
                        cooldown_secs = self.cooldown_period.as_secs(),
                        "rate limited by player source"
                    );
                    state.rate_limited = true;
                    state.error = Some(PagerError::RateLimited);
                    FetchOutcome::RateLimited
                }
                Err(e) => {
                    tracing::error!(error = %e, cursor, "failed to fetch players");
                    state.error = Some(PagerError::FetchFailed);
                    FetchOutcome::Failed
                }
            };
            (outcome, state.status())
        };

        if outcome == FetchOutcome::RateLimited {
            self.start_cooldown();
        }
        self.events.publish(StateEvent::PagerChanged(status));

        outcome
    }

    fn start_cooldown(&self) {
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let period = self.cooldown_period;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(period).await;
            let status = {
                let mut state = lock(&state);
                state.rate_limited = false;
                state.error = None;
                state.status()
            };
            tracing::info!("rate limit cool-down finished");
            events.publish(StateEvent::PagerChanged(status));
        });

        let mut slot = self.cooldown.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Stops the pager: aborts a pending cool-down and turns every later
    /// fetch into a no-op
    pub fn shutdown(&self) {
        lock(&self.state).stopped = true;
        self.abort_cooldown();
    }

    fn abort_cooldown(&self) {
        let mut slot = self.cooldown.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }

    pub fn status(&self) -> PagerStatus {
        lock(&self.state).status()
    }

    /// Copy of every fetched player, in fetch order
    pub fn players(&self) -> Vec<Player> {
        lock(&self.state).players.clone()
    }

    /// Runs `f` over the fetched players without copying them
    pub fn with_players<R>(&self, f: impl FnOnce(&[Player]) -> R) -> R {
        f(&lock(&self.state).players)
    }
}

impl Drop for PlayerPager {
    fn drop(&mut self) {
        self.abort_cooldown();
    }
}
