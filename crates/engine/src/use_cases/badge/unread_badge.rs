//! Unread badge façade - the single owner of the persisted unread state.

use std::sync::{Arc, RwLock};

use threadwatch_domain::{
    reconcile, BadgePayload, ItemId, ReconcileInput, Reconciliation, UnreadIds, UnreadState,
};
use tokio::sync::Mutex;

use super::BadgeError;
use crate::infrastructure::app_settings::BadgeSettings;
use crate::infrastructure::change_signal::{ChangeSignal, ChangeSubscription};
use crate::infrastructure::ports::{
    BadgeSinkPort, ClockPort, IdentityPort, SnapshotPort, UnreadStateRepo,
};

/// Result of [`UnreadBadge::update_badge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeOutcome {
    /// Nobody is signed in; the badge was cleared and storage left alone.
    Unauthenticated,
    /// First run: a baseline watermark was persisted, nothing flagged.
    Initialized,
    /// A normal reconciliation was persisted.
    Updated {
        badge: Option<BadgePayload>,
        /// Whether the visible unread set changed (and the signal fired).
        changed: bool,
    },
    /// A collaborator failed; nothing was persisted or shown.
    Failed,
}

/// Result of [`UnreadBadge::mark_as_read`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkReadOutcome {
    /// There is no persisted state yet.
    NoState,
    /// The identifier was not unread; nothing was written.
    NotUnread,
    /// The identifier was retracted and the reduced state persisted.
    Marked { badge: Option<BadgePayload> },
    /// A collaborator failed; nothing was persisted or shown.
    Failed,
}

/// Polls for new comments on the user's own discussions and maintains the
/// unread badge.
///
/// Holds a cached copy of the last persisted unread set. Observers are told
/// about changes through [`UnreadBadge::subscribe`] only when that set
/// actually differs (order and membership). `update_badge` and
/// `mark_as_read` are serialised internally, so overlapping callers cannot
/// lose each other's writes.
pub struct UnreadBadge {
    identity: Arc<dyn IdentityPort>,
    snapshots: Arc<dyn SnapshotPort>,
    state_repo: Arc<dyn UnreadStateRepo>,
    sink: Arc<dyn BadgeSinkPort>,
    clock: Arc<dyn ClockPort>,
    settings: BadgeSettings,
    cache: RwLock<UnreadIds>,
    signal: ChangeSignal,
    serial: Mutex<()>,
}

impl UnreadBadge {
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        snapshots: Arc<dyn SnapshotPort>,
        state_repo: Arc<dyn UnreadStateRepo>,
        sink: Arc<dyn BadgeSinkPort>,
        clock: Arc<dyn ClockPort>,
        settings: BadgeSettings,
    ) -> Self {
        Self {
            identity,
            snapshots,
            state_repo,
            sink,
            clock,
            settings,
            cache: RwLock::new(UnreadIds::new()),
            signal: ChangeSignal::new(),
            serial: Mutex::new(()),
        }
    }

    /// Run one reconciliation cycle. Never fails; errors are logged and leave
    /// the cache, storage and badge exactly as they were.
    pub async fn update_badge(&self) -> BadgeOutcome {
        let _serial = self.serial.lock().await;
        match self.try_update_badge().await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Badge update failed, keeping previous state");
                BadgeOutcome::Failed
            }
        }
    }

    async fn try_update_badge(&self) -> Result<BadgeOutcome, BadgeError> {
        let Some(user) = self.identity.current_user().await? else {
            tracing::debug!("No signed-in user, hiding badge");
            self.sink.show(None);
            return Ok(BadgeOutcome::Unauthenticated);
        };

        let page = self.snapshots.item_snapshots().await?;
        let prior = self.state_repo.get_data(&self.settings.state_key).await?;

        let reconciliation = reconcile(ReconcileInput {
            current_user: Some(&user),
            items: &page.items,
            prior: prior.as_ref(),
            now: self.clock.now(),
            limit: self.settings.max_unread,
        });

        let first_run = match &reconciliation {
            Reconciliation::FirstRun { .. } => {
                tracing::info!(user = %user, "First run, establishing unread baseline");
                true
            }
            Reconciliation::Reconciled {
                state,
                newly_flagged,
                pruned,
                evicted,
            } => {
                tracing::debug!(
                    user = %user,
                    items = page.items.len(),
                    newly_flagged = newly_flagged.len(),
                    pruned = pruned.len(),
                    evicted = evicted.len(),
                    unread = state.unread_count(),
                    "Reconciled unread state"
                );
                false
            }
            Reconciliation::Unauthenticated => false,
        };

        // Only `Unauthenticated` carries no state, and a user was passed in.
        let Some(state) = reconciliation.into_state() else {
            return Ok(BadgeOutcome::Unauthenticated);
        };

        self.state_repo
            .store_data(&self.settings.state_key, &state)
            .await?;

        let changed = self.publish(&state);
        let badge = self.show_badge(&state);

        if first_run {
            Ok(BadgeOutcome::Initialized)
        } else {
            Ok(BadgeOutcome::Updated { badge, changed })
        }
    }

    /// Retract one identifier from the unread set outside the poll cycle.
    /// Never fails; errors are logged and leave everything unchanged.
    pub async fn mark_as_read(&self, item_id: &ItemId) -> MarkReadOutcome {
        let _serial = self.serial.lock().await;
        match self.try_mark_as_read(item_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, item_id = %item_id, "Mark as read failed");
                MarkReadOutcome::Failed
            }
        }
    }

    async fn try_mark_as_read(&self, item_id: &ItemId) -> Result<MarkReadOutcome, BadgeError> {
        let Some(prior) = self.state_repo.get_data(&self.settings.state_key).await? else {
            return Ok(MarkReadOutcome::NoState);
        };

        let Some(reduced) = prior.without(item_id) else {
            return Ok(MarkReadOutcome::NotUnread);
        };

        self.state_repo
            .store_data(&self.settings.state_key, &reduced)
            .await?;

        // A retraction always notifies, even if the cache was never filled.
        self.replace_cache(&reduced);
        self.notify(&reduced);
        let badge = self.show_badge(&reduced);
        tracing::debug!(item_id = %item_id, unread = reduced.unread_count(), "Marked as read");

        Ok(MarkReadOutcome::Marked { badge })
    }

    /// The last persisted unread set. Never performs I/O.
    pub fn unread_ids(&self) -> Vec<ItemId> {
        self.read_cache().to_vec()
    }

    pub fn is_unread(&self, item_id: &ItemId) -> bool {
        self.read_cache().contains(item_id)
    }

    /// Listen for changes to the unread set. `None` after [`Self::dispose`].
    pub fn subscribe(&self) -> Option<ChangeSubscription> {
        self.signal.subscribe()
    }

    /// Release every subscription. Later changes reach nobody.
    pub fn dispose(&self) {
        self.signal.dispose();
        tracing::debug!("Unread badge disposed");
    }

    /// Replace the cache with the persisted set, signalling if it differs.
    fn publish(&self, state: &UnreadState) -> bool {
        let changed = self.replace_cache(state);
        if changed {
            self.notify(state);
        }
        changed
    }

    /// Returns whether the cached set differed (order and membership).
    fn replace_cache(&self, state: &UnreadState) -> bool {
        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *cache == *state.unread_ids() {
            return false;
        }
        *cache = state.unread_ids().clone();
        true
    }

    fn notify(&self, state: &UnreadState) {
        let reached = self.signal.emit();
        tracing::info!(
            unread = state.unread_count(),
            subscribers = reached,
            "Unread set changed"
        );
    }

    fn show_badge(&self, state: &UnreadState) -> Option<BadgePayload> {
        let badge = BadgePayload::for_count(state.unread_count(), &self.settings.tooltip);
        self.sink.show(badge.clone());
        badge
    }

    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, UnreadIds> {
        self.cache
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
