//! Roster operations.
//!
//! The roster is held in memory and mirrored to the store after every
//! mutation. A failed save is logged and otherwise ignored: the in-memory
//! roster stays authoritative and the next successful save catches the file
//! up. Mutation and save both run under the write lock, so concurrent
//! requests cannot hand out the same id or interleave file writes.

use std::sync::Arc;

use guildhall_domain::{Adventurer, AdventurerDraft, AdventurerId, DomainError, Roster};
use tokio::sync::RwLock;

use crate::infrastructure::ports::RosterStore;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),
}

pub struct RosterUseCases {
    roster: RwLock<Roster>,
    store: Arc<dyn RosterStore>,
}

impl RosterUseCases {
    pub fn new(roster: Roster, store: Arc<dyn RosterStore>) -> Self {
        Self {
            roster: RwLock::new(roster),
            store,
        }
    }

    /// Build from whatever the store holds. A store that cannot be read
    /// yields an empty roster.
    pub async fn load(store: Arc<dyn RosterStore>) -> Self {
        let roster = match store.load().await {
            Ok(adventurers) => {
                tracing::info!(count = adventurers.len(), "Loaded roster");
                Roster::from(adventurers)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load roster, starting empty");
                Roster::new()
            }
        };
        Self::new(roster, store)
    }

    /// Snapshot of every adventurer, in roster order.
    pub async fn list(&self) -> Vec<Adventurer> {
        self.roster.read().await.as_slice().to_vec()
    }

    /// Validate form values, assign the first free id at or above
    /// `requested_id` (0 when absent), and append the new adventurer.
    pub async fn create(
        &self,
        requested_id: Option<AdventurerId>,
        name: &str,
        class: &str,
        level: &str,
    ) -> Result<Adventurer, RosterError> {
        let draft = AdventurerDraft::from_form(name, class, level)?;
        let start = requested_id.unwrap_or_default();

        let mut roster = self.roster.write().await;
        let created = roster.enroll(start, draft)?.clone();
        tracing::info!(
            id = %created.id(),
            class = %created.class(),
            "Adventurer created"
        );

        self.flush(&roster, "create").await;
        Ok(created)
    }

    /// Remove the adventurer with `id`. Returns `None` (and writes nothing)
    /// when no adventurer has that id.
    pub async fn delete(&self, id: AdventurerId) -> Option<Adventurer> {
        self.remove(id, "delete").await
    }

    /// Remove the adventurer with `id` so it can be entered again through
    /// the creation form. Nothing from the removed record is carried over.
    pub async fn modify(&self, id: AdventurerId) -> Option<Adventurer> {
        self.remove(id, "modify").await
    }

    async fn remove(&self, id: AdventurerId, operation: &'static str) -> Option<Adventurer> {
        let mut roster = self.roster.write().await;
        let Some(removed) = roster.remove_by_id(id) else {
            tracing::debug!(%id, operation, "No adventurer with this id");
            return None;
        };
        tracing::info!(%id, operation, "Adventurer removed");

        self.flush(&roster, operation).await;
        Some(removed)
    }

    async fn flush(&self, roster: &Roster, operation: &'static str) {
        if let Err(e) = self.store.save(roster.as_slice()).await {
            tracing::error!(
                error = %e,
                operation,
                "Failed to persist roster, keeping in-memory changes"
            );
        }
    }
}
