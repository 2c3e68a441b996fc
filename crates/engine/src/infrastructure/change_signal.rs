//! In-process "unread set changed" signal.
//!
//! Zero-payload notifications fanned out over a `tokio::sync::broadcast`
//! channel. Subscribers hold a [`ChangeSubscription`]; dropping it
//! unsubscribes. After [`ChangeSignal::dispose`] the sender is gone, so
//! nothing emitted later can reach an earlier subscriber.

use std::sync::Mutex;

use tokio::sync::broadcast;

/// Notifications are coalescing hints, so a small buffer is enough; a lagging
/// subscriber still learns that something changed.
const SIGNAL_CAPACITY: usize = 16;

pub struct ChangeSignal {
    sender: Mutex<Option<broadcast::Sender<()>>>,
}

impl ChangeSignal {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SIGNAL_CAPACITY);
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Register a new subscriber. Returns `None` once disposed.
    pub fn subscribe(&self) -> Option<ChangeSubscription> {
        self.with_sender(|sender| ChangeSubscription {
            receiver: sender.subscribe(),
        })
    }

    /// Notify every current subscriber, returning how many were reached.
    pub fn emit(&self) -> usize {
        // No subscribers is not an error.
        self.with_sender(|sender| sender.send(()).unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.with_sender(broadcast::Sender::receiver_count)
            .unwrap_or(0)
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().is_none()
    }

    /// Drop the sender. Existing subscriptions observe closure.
    pub fn dispose(&self) {
        self.lock().take();
    }

    fn with_sender<T>(&self, f: impl FnOnce(&broadcast::Sender<()>) -> T) -> Option<T> {
        self.lock().as_ref().map(f)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<broadcast::Sender<()>>> {
        self.sender
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// One subscriber's view of the signal.
pub struct ChangeSubscription {
    receiver: broadcast::Receiver<()>,
}

impl ChangeSubscription {
    /// Wait for the next change. Returns `false` once the signal is disposed.
    pub async fn changed(&mut self) -> bool {
        match self.receiver.recv().await {
            Ok(()) => true,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Change subscriber lagged, coalescing");
                true
            }
            Err(broadcast::error::RecvError::Closed) => false,
        }
    }

    /// Consume one pending notification without waiting.
    pub fn try_changed(&mut self) -> bool {
        match self.receiver.try_recv() {
            Ok(()) | Err(broadcast::error::TryRecvError::Lagged(_)) => true,
            Err(broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed) => {
                false
            }
        }
    }

    /// Drain and count pending notifications.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.try_changed() {
            count += 1;
        }
        count
    }
}
