//! Guildhall domain: adventurer records, class templates, and the roster aggregate.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::Roster;
pub use entities::{Adventurer, AdventurerDraft};
pub use error::DomainError;
pub use ids::AdventurerId;
pub use value_objects::{AdventurerName, CharacterClass, ClassTemplate};
