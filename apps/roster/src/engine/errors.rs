use thiserror::Error;

/// Error surfaced by the pager to the player list view
///
/// Both kinds are recoverable: `RateLimited` clears itself after the
/// cool-down, `FetchFailed` clears on the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("Too many requests. Please wait...")]
    RateLimited,

    #[error("Failed to fetch players")]
    FetchFailed,
}
