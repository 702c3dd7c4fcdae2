//! Repository port traits for roster storage.

use async_trait::async_trait;
use guildhall_domain::Adventurer;

use super::error::RepoError;

// =============================================================================
// Roster Storage
// =============================================================================

/// Durable mirror of the roster. Always read and written as a whole.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Read every stored adventurer, in stored order.
    async fn load(&self) -> Result<Vec<Adventurer>, RepoError>;

    /// Replace the stored roster with `adventurers`.
    async fn save(&self, adventurers: &[Adventurer]) -> Result<(), RepoError>;
}
