//! User story orchestration.
//!
//! Use cases keep HTTP handlers thin while coordinating the roster and its
//! persistence port.

pub mod roster;

pub use roster::{RosterError, RosterUseCases};
