//! Screen lifetime shared by an aggregator's tasks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Ends when the owning screen is destroyed.
///
/// Cloned into the update loop and every subscription pump; all of them
/// stop once [`end`](Self::end) has been called.
#[derive(Clone, Default)]
pub struct ScreenLifetime {
    ended: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// End the lifetime. Returns true for the call that actually ended it.
    pub fn end(&self) -> bool {
        if self.ended.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }

    /// Resolve once the lifetime has ended.
    pub async fn ended(&self) {
        // Register with Notify before checking the flag, otherwise an end()
        // between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_ended() {
            return;
        }
        notified.await;
    }
}
