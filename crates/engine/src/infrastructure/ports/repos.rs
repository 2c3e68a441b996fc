//! Repository port for the persisted unread state.

use async_trait::async_trait;
use threadwatch_domain::UnreadState;

use super::error::RepoError;

// =============================================================================
// Badge State Storage
// =============================================================================

/// Key/value storage for [`UnreadState`].
///
/// Each call is expected to be atomic on its own; the engine does not rely
/// on atomicity across a `get_data`/`store_data` pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnreadStateRepo: Send + Sync {
    async fn get_data(&self, key: &str) -> Result<Option<UnreadState>, RepoError>;
    async fn store_data(&self, key: &str, state: &UnreadState) -> Result<(), RepoError>;
}
