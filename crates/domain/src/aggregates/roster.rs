//! Roster aggregate - the ordered collection of every adventurer
//!
//! Insertion order is preserved for listing. Ids are unique across the
//! roster; new ids are found by scanning upward from a requested start.

use crate::entities::{Adventurer, AdventurerDraft};
use crate::error::DomainError;
use crate::ids::AdventurerId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    adventurers: Vec<Adventurer>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the first adventurer with this id.
    pub fn find_index_by_id(&self, id: AdventurerId) -> Option<usize> {
        self.adventurers.iter().position(|a| a.id() == id)
    }

    pub fn is_id_used(&self, id: AdventurerId) -> bool {
        self.find_index_by_id(id).is_some()
    }

    /// First id at or above `start` that no adventurer holds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if the scan runs past `i64::MAX`.
    pub fn next_free_id(&self, start: AdventurerId) -> Result<AdventurerId, DomainError> {
        let mut candidate = start;
        while self.is_id_used(candidate) {
            candidate = candidate
                .next()
                .ok_or_else(|| DomainError::constraint("No free adventurer id left"))?;
        }
        Ok(candidate)
    }

    pub fn append(&mut self, adventurer: Adventurer) {
        self.adventurers.push(adventurer);
    }

    /// Remove the adventurer at `index`, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Option<Adventurer> {
        (index < self.adventurers.len()).then(|| self.adventurers.remove(index))
    }

    pub fn remove_by_id(&mut self, id: AdventurerId) -> Option<Adventurer> {
        let index = self.find_index_by_id(id)?;
        self.remove_at(index)
    }

    /// Assign a free id starting at `start`, build the adventurer, and append it.
    pub fn enroll(
        &mut self,
        start: AdventurerId,
        draft: AdventurerDraft,
    ) -> Result<&Adventurer, DomainError> {
        let id = self.next_free_id(start)?;
        self.append(Adventurer::new(id, draft));
        let index = self.adventurers.len() - 1;
        Ok(&self.adventurers[index])
    }

    pub fn as_slice(&self) -> &[Adventurer] {
        &self.adventurers
    }

}

impl From<Vec<Adventurer>> for Roster {
    fn from(adventurers: Vec<Adventurer>) -> Self {
        Self { adventurers }
    }
}
