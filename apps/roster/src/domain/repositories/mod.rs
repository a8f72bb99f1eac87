// Ports the engine depends on
// Implemented by adapters in the infrastructure layer

pub mod errors;
pub mod player_source;
pub mod session_repository;
pub mod team_repository;

pub use errors::StorageError;
pub use player_source::{PlayerPage, PlayerSource, SourceError};
pub use session_repository::SessionRepository;
pub use team_repository::TeamRepository;
