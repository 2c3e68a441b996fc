//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    app_settings::BadgeSettings,
    clock::SystemClock,
    poller::BadgePoller,
    ports::{BadgeSinkPort, ClockPort, IdentityPort, SnapshotPort, UnreadStateRepo},
};
use crate::use_cases::UnreadBadge;

/// Main application state.
///
/// Owns the badge engine for one session. Dropping or disposing the app
/// releases every change subscription.
pub struct App {
    pub badge: Arc<UnreadBadge>,
    pub settings: BadgeSettings,
}

impl App {
    /// Create a new App with all dependencies wired up, using the system clock.
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        snapshots: Arc<dyn SnapshotPort>,
        state_repo: Arc<dyn UnreadStateRepo>,
        sink: Arc<dyn BadgeSinkPort>,
        settings: BadgeSettings,
    ) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        Self::with_clock(identity, snapshots, state_repo, sink, clock, settings)
    }

    pub fn with_clock(
        identity: Arc<dyn IdentityPort>,
        snapshots: Arc<dyn SnapshotPort>,
        state_repo: Arc<dyn UnreadStateRepo>,
        sink: Arc<dyn BadgeSinkPort>,
        clock: Arc<dyn ClockPort>,
        settings: BadgeSettings,
    ) -> Self {
        let badge = Arc::new(UnreadBadge::new(
            identity,
            snapshots,
            state_repo,
            sink,
            clock,
            settings.clone(),
        ));
        Self { badge, settings }
    }

    /// Scheduler that polls at the configured interval.
    pub fn poller(&self) -> BadgePoller {
        BadgePoller::new(self.badge.clone(), self.settings.poll_interval)
    }

    pub fn dispose(&self) {
        self.badge.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use threadwatch_domain::{ActivityRecord, ItemSnapshot, SnapshotPage};

    use crate::infrastructure::badge_sink::RecordingBadgeSink;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::identity::StaticIdentity;
    use crate::infrastructure::ports::MockSnapshotPort;
    use crate::infrastructure::state_store::InMemoryStateRepo;
    use crate::use_cases::BadgeOutcome;

    #[tokio::test]
    async fn wires_badge_end_to_end() {
        let t0 = Utc.with_ymd_and_hms(2025, 6, 15, 8, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();

        let mut snapshots = MockSnapshotPort::new();
        snapshots.expect_item_snapshots().returning(move || {
            Ok(SnapshotPage::new(vec![ItemSnapshot::new(
                "D_1",
                "octocat",
                t0 - chrono::Duration::hours(1),
                t0 + chrono::Duration::minutes(30),
            )
            .with_activity(vec![ActivityRecord::from_other(
                t0 + chrono::Duration::minutes(30),
            )])]))
        });
        let snapshots: Arc<dyn SnapshotPort> = Arc::new(snapshots);
        let repo: Arc<dyn UnreadStateRepo> = Arc::new(InMemoryStateRepo::new());
        let sink = Arc::new(RecordingBadgeSink::new());
        let identity: Arc<dyn IdentityPort> = Arc::new(StaticIdentity::signed_in("octocat"));

        // First session establishes the baseline at t0.
        let first = App::with_clock(
            identity.clone(),
            snapshots.clone(),
            repo.clone(),
            sink.clone(),
            Arc::new(FixedClock(t0)),
            BadgeSettings::default(),
        );
        assert_eq!(first.badge.update_badge().await, BadgeOutcome::Initialized);
        first.dispose();

        // A later session sees the comment posted after t0.
        let second = App::with_clock(
            identity,
            snapshots,
            repo,
            sink.clone(),
            Arc::new(FixedClock(t1)),
            BadgeSettings::default(),
        );
        second.badge.update_badge().await;
        assert_eq!(second.badge.unread_ids().len(), 1);
        assert_eq!(sink.last().map(|b| b.count()), Some(1));
    }
}
