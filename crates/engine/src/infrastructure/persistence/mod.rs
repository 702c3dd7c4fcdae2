//! Persistence adapters.

mod json_roster_store;

pub use json_roster_store::JsonRosterStore;
