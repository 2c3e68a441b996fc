//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Identity (who is signed in)
//! - Snapshots (the user's discussions and their latest comments)
//! - Badge state storage (could swap SQLite -> editor global state)
//! - The visual indicator
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::UnreadStateRepo;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{BadgeSinkPort, IdentityPort, SnapshotPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockBadgeSinkPort, MockIdentityPort, MockSnapshotPort};

#[cfg(test)]
pub use repos::MockUnreadStateRepo;

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{IdentityError, RepoError, SnapshotError};
