//! Unified error types for the domain layer
//!
//! The reconciler itself never fails; errors here come from constructing
//! validated value objects (limits, templates) out of configuration input.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for out-of-range or malformed input.
    ///
    /// # Example
    /// ```ignore
    /// if limit == 0 {
    ///     return Err(DomainError::validation("Unread limit must be >= 1"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
