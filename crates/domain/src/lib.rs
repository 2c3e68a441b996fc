//! Threadwatch domain.
//!
//! Types describing polled discussion snapshots and the persisted unread
//! state, plus the pure [`reconcile`] function that decides which of the
//! user's own discussions have new comments from other people.

extern crate self as threadwatch_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod reconcile;
pub mod value_objects;

pub use entities::{ActivityRecord, BadgePayload, ItemSnapshot, PageInfo, SnapshotPage, UnreadState};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ItemId, UserId};

pub use reconcile::{reconcile, ReconcileInput, Reconciliation};

pub use value_objects::{TooltipTemplate, UnreadIds, UnreadLimit};
