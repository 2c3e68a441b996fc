//! Visual indicator sinks.

use std::sync::Mutex;

use threadwatch_domain::BadgePayload;

use crate::infrastructure::ports::BadgeSinkPort;

/// Renders the badge as a log line. Used by the headless binary.
#[derive(Default)]
pub struct TracingBadgeSink;

impl BadgeSinkPort for TracingBadgeSink {
    fn show(&self, badge: Option<BadgePayload>) {
        match badge {
            Some(badge) => {
                tracing::info!(count = badge.count(), tooltip = badge.tooltip(), "Badge shown")
            }
            None => tracing::info!("Badge cleared"),
        }
    }
}

/// Keeps the most recent badge and how many times it was written.
#[derive(Default)]
pub struct RecordingBadgeSink {
    inner: Mutex<Recorded>,
}

#[derive(Default)]
struct Recorded {
    last: Option<BadgePayload>,
    writes: usize,
}

impl RecordingBadgeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<BadgePayload> {
        self.lock().last.clone()
    }

    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BadgeSinkPort for RecordingBadgeSink {
    fn show(&self, badge: Option<BadgePayload>) {
        let mut recorded = self.lock();
        recorded.last = badge;
        recorded.writes += 1;
    }
}
