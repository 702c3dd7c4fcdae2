//! Validated name newtype for adventurers
//!
//! The name is kept exactly as submitted; the only rule is that it is non-empty.
//! Names read back from the roster file are taken as stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated adventurer name (non-empty, stored verbatim)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdventurerName(String);

impl AdventurerName {
    /// Create a new validated adventurer name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("Adventurer name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdventurerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AdventurerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AdventurerName> for String {
    fn from(name: AdventurerName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_name_verbatim() {
        let name = AdventurerName::new("  Thorin ").expect("valid name");
        assert_eq!(name.as_str(), "  Thorin ");
    }

    #[test]
    fn rejects_empty_name() {
        let err = AdventurerName::new("").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn deserialize_keeps_stored_name() {
        let name: AdventurerName = serde_json::from_str("\"\"").expect("stored name");
        assert_eq!(name.as_str(), "");
        assert_eq!(serde_json::to_string(&name).expect("serialize"), "\"\"");
    }
}
