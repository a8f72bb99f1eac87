// Team domain module
// Contains the team aggregate, its value objects, form validation and events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;
pub mod validation;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::{Team, TeamDraft, TeamError};
pub use validation::ValidationErrors;
pub use value_objects::TeamId;
