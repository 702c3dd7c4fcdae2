//! Domain entities

mod adventurer;

pub use adventurer::{Adventurer, AdventurerDraft};
