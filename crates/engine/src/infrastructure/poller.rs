//! Badge poller - the periodic scheduler around [`UnreadBadge::update_badge`].
//!
//! Runs one reconciliation per tick until the shutdown future resolves. Each
//! cycle is awaited before the next tick is taken, so cycles never overlap.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::use_cases::badge::{BadgeOutcome, UnreadBadge};

pub struct BadgePoller {
    badge: Arc<UnreadBadge>,
    interval: Duration,
}

impl BadgePoller {
    pub fn new(badge: Arc<UnreadBadge>, interval: Duration) -> Self {
        Self { badge, interval }
    }

    /// Run until `shutdown` resolves. The first cycle runs immediately.
    ///
    /// Returns the number of completed cycles.
    pub async fn run(self, shutdown: impl Future<Output = ()>) -> usize {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut cycles = 0;
        tracing::info!(interval_secs = self.interval.as_secs(), "Starting badge poller");

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!(cycles, "Badge poller stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let outcome = self.badge.update_badge().await;
                    cycles += 1;
                    match outcome {
                        BadgeOutcome::Failed => {
                            tracing::warn!("Badge poll failed, retrying next interval");
                        }
                        outcome => tracing::debug!(?outcome, "Badge poll complete"),
                    }
                }
            }
        }

        cycles
    }
}
