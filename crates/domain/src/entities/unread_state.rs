//! Persisted unread state
//!
//! The only durable artifact the badge engine owns: the ordered set of
//! unread item identifiers plus the watermark of the last reconciliation.
//! It is read and written as a single unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UnreadIds;
use crate::ItemId;

/// Unread identifiers and the `lastCheckedAt` watermark.
///
/// Serialized with camelCase keys (`unreadIds`, `lastCheckedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadState {
    unread_ids: UnreadIds,
    last_checked_at: DateTime<Utc>,
}

impl UnreadState {
    pub fn new(unread_ids: UnreadIds, last_checked_at: DateTime<Utc>) -> Self {
        Self {
            unread_ids,
            last_checked_at,
        }
    }

    /// Baseline state written on the very first reconciliation.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self::new(UnreadIds::new(), now)
    }

    pub fn unread_ids(&self) -> &UnreadIds {
        &self.unread_ids
    }

    pub fn last_checked_at(&self) -> DateTime<Utc> {
        self.last_checked_at
    }

    pub fn unread_count(&self) -> usize {
        self.unread_ids.len()
    }

    /// State with `id` retracted, or `None` if `id` was not unread.
    ///
    /// The watermark is carried over unchanged.
    pub fn without(&self, id: &ItemId) -> Option<Self> {
        let mut unread_ids = self.unread_ids.clone();
        if !unread_ids.remove(id) {
            return None;
        }
        Some(Self::new(unread_ids, self.last_checked_at))
    }
}
