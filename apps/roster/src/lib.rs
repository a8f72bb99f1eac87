//! Roster Engine Library
//!
//! Headless core of a basketball roster manager: pages players in from the
//! upstream league API, keeps user-built teams, and persists the session and
//! team list to local storage.

pub mod config;
pub mod domain;
pub mod engine;
pub mod infrastructure;

#[cfg(test)]
mod test_support;
