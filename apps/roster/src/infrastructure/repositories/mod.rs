// Storage adapters implementing the domain repository ports

pub mod in_memory_store;
pub mod json_file_store;
pub mod records;

pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
pub use records::{AUTH_KEY, TEAMS_KEY};
