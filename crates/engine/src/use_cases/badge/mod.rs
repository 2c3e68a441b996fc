//! Unread badge use cases.
//!
//! Wraps the pure reconciler with the I/O around it:
//! - Polling: resolve the user, fetch snapshots, reconcile, persist, notify
//! - Marking a single discussion as read from the UI
//! - Exposing the last persisted unread set and a change signal

mod unread_badge;

pub use unread_badge::{BadgeOutcome, MarkReadOutcome, UnreadBadge};

use crate::infrastructure::ports::{IdentityError, RepoError, SnapshotError};

/// Collaborator failures caught at the badge boundary.
///
/// Never surfaced to callers of [`UnreadBadge`]; they are logged and the
/// operation completes as a no-op.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
