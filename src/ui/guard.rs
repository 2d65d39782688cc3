//! Per-action in-flight guard.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

/// Tracks which actions of one aggregator are currently running.
#[derive(Clone, Default)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<String>>>,
}

/// Held while an action runs; releases the key on drop.
pub struct InFlightToken {
    active: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl InFlight {
    /// Claim `key`. `None` if the same action is already running.
    pub fn try_begin(&self, key: impl Into<String>) -> Option<InFlightToken> {
        let key = key.into();
        if !self.active.lock().insert(key.clone()) {
            tracing::debug!(action = %key, "action already in flight");
            return None;
        }
        Some(InFlightToken {
            active: Arc::clone(&self.active),
            key,
        })
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.active.lock().contains(key)
    }
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.active.lock().remove(&self.key);
    }
}
