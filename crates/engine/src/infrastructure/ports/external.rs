//! External collaborator ports (identity, snapshots, indicator sink).

use async_trait::async_trait;
use threadwatch_domain::{BadgePayload, SnapshotPage, UserId};

use super::error::{IdentityError, SnapshotError};

/// Resolves who is signed in. `Ok(None)` means nobody is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    async fn current_user(&self) -> Result<Option<UserId>, IdentityError>;
}

/// Fetches the first page of the signed-in user's items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotPort: Send + Sync {
    async fn item_snapshots(&self) -> Result<SnapshotPage, SnapshotError>;
}

/// Where the badge is rendered. Write-only from the engine's side.
///
/// `None` clears the badge.
#[cfg_attr(test, mockall::automock)]
pub trait BadgeSinkPort: Send + Sync {
    fn show(&self, badge: Option<BadgePayload>);
}
