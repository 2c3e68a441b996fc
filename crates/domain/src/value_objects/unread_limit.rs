//! Maximum number of unread identifiers kept in persisted state
//!
//! A validated newtype around the size bound applied by the reconciler's
//! trim step. The reference policy keeps 20 identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bound on the unread identifier set (validated newtype)
///
/// # Validation Rules
///
/// - Value must be >= 1 (a zero bound would make every flag vanish)
/// - Value must be <= 1000
///
/// # Examples
///
/// ```
/// use threadwatch_domain::value_objects::UnreadLimit;
///
/// let limit = UnreadLimit::new(20).unwrap();
/// assert_eq!(limit.value(), 20);
///
/// assert!(UnreadLimit::new(0).is_err());
/// assert!(UnreadLimit::new(1001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct UnreadLimit(usize);

impl UnreadLimit {
    /// Minimum valid value
    pub const MIN: usize = 1;

    /// Maximum valid value
    pub const MAX: usize = 1000;

    /// Default value: 20 identifiers
    pub const DEFAULT: usize = 20;

    /// Create a new `UnreadLimit`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the value is outside `MIN..=MAX`.
    pub fn new(value: usize) -> Result<Self, crate::DomainError> {
        if value < Self::MIN {
            return Err(crate::DomainError::validation(format!(
                "Unread limit must be >= {}, got {}",
                Self::MIN,
                value
            )));
        }

        if value > Self::MAX {
            return Err(crate::DomainError::validation(format!(
                "Unread limit must be <= {}, got {}",
                Self::MAX,
                value
            )));
        }

        Ok(Self(value))
    }

    /// Create a new `UnreadLimit`, clamping to the valid range.
    ///
    /// ```
    /// use threadwatch_domain::value_objects::UnreadLimit;
    ///
    /// assert_eq!(UnreadLimit::clamped(0).value(), 1);
    /// assert_eq!(UnreadLimit::clamped(5000).value(), 1000);
    /// assert_eq!(UnreadLimit::clamped(7).value(), 7);
    /// ```
    pub fn clamped(value: usize) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for UnreadLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for UnreadLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} items", self.0)
    }
}

impl From<UnreadLimit> for usize {
    fn from(limit: UnreadLimit) -> Self {
        limit.0
    }
}

impl TryFrom<usize> for UnreadLimit {
    type Error = crate::DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
