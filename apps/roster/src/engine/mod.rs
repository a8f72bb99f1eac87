// Roster engine
//
// The application state container and the stores it is built from:
// session, paged player fetch, team list, plus derived queries and the
// change-notification bus.

pub mod errors;
pub mod events;
pub mod pager;
pub mod session;
pub mod state;
pub mod summary;
pub mod teams;

// Re-export main types
pub use errors::PagerError;
pub use events::{EventBus, StateEvent};
pub use pager::{FetchOutcome, PagerStatus, PlayerPager, PAGE_SIZE, RATE_LIMIT_COOLDOWN};
pub use session::SessionStore;
pub use state::AppState;
pub use summary::RosterSummary;
pub use teams::TeamRoster;
