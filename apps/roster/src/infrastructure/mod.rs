// Infrastructure layer module
// Storage adapters and the upstream HTTP client

pub mod http_player_source;
pub mod repositories;

pub use http_player_source::HttpPlayerSource;
