//! Error types for port operations.

/// State repository errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Errors from resolving the signed-in user.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
    #[error("Session rejected: {0}")]
    Rejected(String),
}

/// Errors from fetching item snapshots.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid snapshot response: {0}")]
    InvalidResponse(String),
}
