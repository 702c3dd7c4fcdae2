//! Port traits for infrastructure boundaries.
//!
//! The roster store is the only abstraction in the engine; it exists so the
//! JSON file can be swapped for a mock in tests or another backend later.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::RosterStore;

#[cfg(test)]
pub use repos::MockRosterStore;
