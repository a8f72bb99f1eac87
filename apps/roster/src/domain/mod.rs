// Domain layer module exports
// Domain is independent of storage and transport concerns

pub mod player;
pub mod repositories;
pub mod session;
pub mod team;
