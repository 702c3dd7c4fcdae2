//! Aggregate roots - domain objects that own their related data

pub mod roster;

pub use roster::Roster;
