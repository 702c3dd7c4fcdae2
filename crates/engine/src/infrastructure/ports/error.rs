//! Error types for port operations.

/// Persistence errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// File-system operation failed - includes operation name for tracing.
    #[error("I/O error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create an Io error with operation context.
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_operation() {
        let err = RepoError::io("write roster", "disk full");
        assert_eq!(err.to_string(), "I/O error in write roster: disk full");
    }

    #[test]
    fn serialization_error_message() {
        let err = RepoError::serialization("expected value at line 1");
        assert!(matches!(err, RepoError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
