//! Unread reconciliation
//!
//! Pure decision logic: given who is signed in, a fresh snapshot of items and
//! the previously persisted [`UnreadState`], compute the state to persist
//! next. No I/O happens here; the caller supplies `now` and does all storage.
//!
//! Ordering: prior unread identifiers keep their persisted order and newly
//! flagged identifiers are appended in snapshot order. The size bound then
//! keeps the newest tail, so eviction is by flagging order, not item age.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::entities::{ItemSnapshot, UnreadState};
use crate::value_objects::UnreadLimit;
use crate::{ItemId, UserId};

/// Everything one reconciliation needs.
#[derive(Debug, Clone, Copy)]
pub struct ReconcileInput<'a> {
    /// `None` when nobody is signed in.
    pub current_user: Option<&'a UserId>,
    pub items: &'a [ItemSnapshot],
    /// `None` on the very first run.
    pub prior: Option<&'a UnreadState>,
    pub now: DateTime<Utc>,
    pub limit: UnreadLimit,
}

/// Result of one reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Nobody is signed in; nothing should be persisted or flagged.
    Unauthenticated,
    /// No prior state existed; a baseline watermark was established and no
    /// historical activity was flagged.
    FirstRun { state: UnreadState },
    /// Normal reconciliation against a prior watermark.
    Reconciled {
        state: UnreadState,
        /// Identifiers added this round (not previously unread).
        newly_flagged: Vec<ItemId>,
        /// Identifiers dropped because their item left the relevant snapshot.
        pruned: Vec<ItemId>,
        /// Identifiers dropped to respect the size bound.
        evicted: Vec<ItemId>,
    },
}

impl Reconciliation {
    /// The state to persist, if any.
    pub fn state(&self) -> Option<&UnreadState> {
        match self {
            Self::Unauthenticated => None,
            Self::FirstRun { state } | Self::Reconciled { state, .. } => Some(state),
        }
    }

    pub fn into_state(self) -> Option<UnreadState> {
        match self {
            Self::Unauthenticated => None,
            Self::FirstRun { state } | Self::Reconciled { state, .. } => Some(state),
        }
    }

    /// Count that drives the badge. Zero when unauthenticated or on first run.
    pub fn unread_count(&self) -> usize {
        self.state().map_or(0, UnreadState::unread_count)
    }
}

/// Compute the next unread state.
pub fn reconcile(input: ReconcileInput<'_>) -> Reconciliation {
    let Some(user) = input.current_user else {
        return Reconciliation::Unauthenticated;
    };

    let relevant: Vec<&ItemSnapshot> = input
        .items
        .iter()
        .filter(|item| item.is_authored_by(user))
        .collect();

    let Some(prior) = input.prior else {
        return Reconciliation::FirstRun {
            state: UnreadState::initial(input.now),
        };
    };

    let watermark = prior.last_checked_at();
    let mut unread_ids = prior.unread_ids().clone();
    let mut newly_flagged = Vec::new();

    for item in &relevant {
        if item.has_activity_since(watermark)
            && item.has_foreign_activity_since(watermark)
            && unread_ids.push(item.id.clone())
        {
            newly_flagged.push(item.id.clone());
        }
    }

    let present: HashSet<&ItemId> = relevant.iter().map(|item| &item.id).collect();
    let pruned = unread_ids.retain(|id| present.contains(id));
    let evicted = unread_ids.trim_to(input.limit);

    // A clock that steps backwards must not move the watermark backwards.
    let last_checked_at = input.now.max(watermark);

    Reconciliation::Reconciled {
        state: UnreadState::new(unread_ids, last_checked_at),
        newly_flagged,
        pruned,
        evicted,
    }
}
