//! Aggregator runtime shared by every screen.
//!
//! A [`ViewStore`] owns one state record. Subscriptions and one-shot reads
//! are pumped by their own tasks, which turn each [`AsyncResult`] into an
//! intent and push it onto a single channel. One update loop drains that
//! channel and runs the reducer, so merges never interleave and the record
//! needs no lock. Every new record is published whole through a `watch`
//! channel; readers only ever see complete snapshots.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::async_result::AsyncResult;
use crate::repository::Subscription;
use crate::ui::action::ActionError;
use crate::ui::guard::{InFlight, InFlightToken};
use crate::ui::lifecycle::ScreenLifetime;
use crate::ui::mvi::{Reducer, UiState};
use crate::ui::status::Phase;

enum Envelope<I> {
    Intent(I),
    /// A source delivered its first terminal value (or ended).
    Settled,
}

/// Handles the update loop shares with the store.
struct Shared<S> {
    state: Arc<watch::Sender<S>>,
    unsettled: Arc<watch::Sender<usize>>,
    lifetime: ScreenLifetime,
    commit: Arc<Mutex<()>>,
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            unsettled: Arc::clone(&self.unsettled),
            lifetime: self.lifetime.clone(),
            commit: Arc::clone(&self.commit),
        }
    }
}

/// State holder for one screen.
pub struct ViewStore<R: Reducer> {
    name: &'static str,
    shared: Shared<R::State>,
    sender: mpsc::UnboundedSender<Envelope<R::Intent>>,
    activated: AtomicBool,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    in_flight: InFlight,
}

impl<R: Reducer> ViewStore<R> {
    /// Create a store holding `R::State::default()` and start its update
    /// loop.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn new(name: &'static str) -> Self {
        Self::with_state(name, R::State::default())
    }

    /// Like [`new`](Self::new) with an explicit initial record.
    pub fn with_state(name: &'static str, initial: R::State) -> Self {
        let (state, _) = watch::channel(initial);
        let (unsettled, _) = watch::channel(0usize);
        let shared = Shared {
            state: Arc::new(state),
            unsettled: Arc::new(unsettled),
            lifetime: ScreenLifetime::new(),
            commit: Arc::new(Mutex::new(())),
        };
        let (sender, receiver) = mpsc::unbounded_channel();
        let update_loop = tokio::spawn(run_update_loop::<R>(name, shared.clone(), receiver));

        Self {
            name,
            shared,
            sender,
            activated: AtomicBool::new(false),
            tasks: Mutex::new(vec![update_loop]),
            in_flight: InFlight::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// A copy of the current record.
    pub fn snapshot(&self) -> R::State {
        self.shared.state.borrow().clone()
    }

    /// Observe every published record.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.shared.state.subscribe()
    }

    pub fn phase(&self) -> Phase {
        if !self.is_activated() {
            return Phase::Idle;
        }
        self.shared.state.borrow().status().phase()
    }

    /// Claim the right to activate. True exactly once per store, and never
    /// after teardown; callers bind their sources only when it returns true.
    pub fn begin_activation(&self) -> bool {
        if self.is_closed() {
            return false;
        }
        let first = !self.activated.swap(true, Ordering::SeqCst);
        if first {
            tracing::info!(screen = self.name, "screen activated");
        } else {
            tracing::debug!(screen = self.name, "activation ignored, already active");
        }
        first
    }

    pub fn is_activated(&self) -> bool {
        self.activated.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.shared.lifetime.is_ended()
    }

    /// Queue an intent for the update loop. False after teardown.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        if self.is_closed() {
            return false;
        }
        self.sender.send(Envelope::Intent(intent)).is_ok()
    }

    /// Claim the in-flight slot for `key`; `None` while the same action is
    /// still running.
    pub fn begin_action(&self, key: impl Into<String>) -> Option<InFlightToken> {
        self.in_flight.try_begin(key)
    }

    /// [`begin_action`](Self::begin_action) for action methods that report
    /// their outcome to the caller.
    pub fn claim(&self, action: impl Into<String>) -> Result<InFlightToken, ActionError> {
        if self.is_closed() {
            return Err(ActionError::Closed);
        }
        let action = action.into();
        self.begin_action(action.clone())
            .ok_or(ActionError::InFlight { action })
    }

    /// Pump a live query into the state until teardown.
    pub fn bind<T, F>(&self, mut subscription: Subscription<T>, to_intent: F)
    where
        T: Send + 'static,
        F: Fn(AsyncResult<T>) -> R::Intent + Send + 'static,
    {
        let sender = self.sender.clone();
        let lifetime = self.shared.lifetime.clone();
        let name = self.name;
        self.spawn_source(async move {
            let mut settled = false;
            loop {
                let next = tokio::select! {
                    biased;
                    _ = lifetime.ended() => return,
                    next = subscription.next() => next,
                };
                let Some(result) = next else { break };
                let terminal = result.is_terminal();
                if let AsyncResult::Failure(message) = &result {
                    tracing::warn!(screen = name, error = %message, "subscription failed");
                }
                if sender.send(Envelope::Intent(to_intent(result))).is_err() {
                    return;
                }
                if terminal && !settled {
                    settled = true;
                    if sender.send(Envelope::Settled).is_err() {
                        return;
                    }
                }
            }
            if !settled && sender.send(Envelope::Settled).is_err() {
                tracing::trace!(screen = name, "settle marker dropped (store gone)");
            }
        });
    }

    /// Run a one-shot read: `Pending` now, the outcome when it completes.
    pub fn load<T, E, Fut, F>(&self, request: Fut, to_intent: F)
    where
        T: Send + 'static,
        E: Display + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        F: Fn(AsyncResult<T>) -> R::Intent + Send + 'static,
    {
        let sender = self.sender.clone();
        let lifetime = self.shared.lifetime.clone();
        let name = self.name;
        self.spawn_source(async move {
            if sender.send(Envelope::Intent(to_intent(AsyncResult::Pending))).is_err() {
                return;
            }
            let result = tokio::select! {
                biased;
                _ = lifetime.ended() => return,
                result = request => result,
            };
            let result = AsyncResult::from(result);
            if let AsyncResult::Failure(message) = &result {
                tracing::warn!(screen = name, error = %message, "read failed");
            }
            if sender.send(Envelope::Intent(to_intent(result))).is_err()
                || sender.send(Envelope::Settled).is_err()
            {
                tracing::trace!(screen = name, "read result dropped (store gone)");
            }
        });
    }

    /// Run `request` on the caller's task, folding `Pending` and then its
    /// outcome into the state. Returns once the outcome is queued.
    pub async fn run<T, E, Fut, F>(&self, request: Fut, to_intent: F)
    where
        E: Display,
        Fut: Future<Output = Result<T, E>>,
        F: Fn(AsyncResult<T>) -> R::Intent,
    {
        if self.is_closed() {
            return;
        }
        self.shared.unsettled.send_modify(|count| *count += 1);
        self.dispatch(to_intent(AsyncResult::Pending));
        let result = AsyncResult::from(request.await);
        if let AsyncResult::Failure(message) = &result {
            tracing::warn!(screen = self.name, error = %message, "action failed");
        }
        if !self.dispatch(to_intent(result)) || self.sender.send(Envelope::Settled).is_err() {
            tracing::trace!(screen = self.name, "action outcome dropped (screen closed)");
        }
    }

    /// Wait until every bound source has delivered its first terminal value
    /// and that value has been merged, then return the record.
    pub async fn settled(&self) -> R::State {
        let mut unsettled = self.shared.unsettled.subscribe();
        tokio::select! {
            _ = self.shared.lifetime.ended() => {}
            _ = unsettled.wait_for(|count| *count == 0) => {}
        }
        self.snapshot()
    }

    /// Wait for the first record matching `predicate`.
    pub async fn wait_for(&self, mut predicate: impl FnMut(&R::State) -> bool) -> R::State {
        let mut receiver = self.subscribe();
        let matched = match receiver.wait_for(|state| predicate(state)).await {
            Ok(state) => Some((*state).clone()),
            Err(_) => None,
        };
        matched.unwrap_or_else(|| self.snapshot())
    }

    /// Cancel every subscription and stop the update loop. Once this
    /// returns, the record never changes again.
    pub fn teardown(&self) {
        {
            // Waits for a merge in progress to finish.
            let _commit = self.shared.commit.lock();
            if !self.shared.lifetime.end() {
                return;
            }
        }
        let tasks: Vec<JoinHandle<()>> = self.tasks.lock().drain(..).collect();
        for task in &tasks {
            task.abort();
        }
        self.shared.unsettled.send_replace(0);
        tracing::info!(screen = self.name, tasks = tasks.len(), "screen torn down");
    }

    fn spawn_source<Fut>(&self, source: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock();
        if self.is_closed() {
            return;
        }
        tasks.retain(|task| !task.is_finished());
        self.shared.unsettled.send_modify(|count| *count += 1);
        tasks.push(tokio::spawn(source));
    }
}

impl<R: Reducer> Drop for ViewStore<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn run_update_loop<R: Reducer>(
    name: &'static str,
    shared: Shared<R::State>,
    mut receiver: mpsc::UnboundedReceiver<Envelope<R::Intent>>,
) {
    loop {
        let envelope = tokio::select! {
            biased;
            _ = shared.lifetime.ended() => break,
            next = receiver.recv() => match next {
                Some(envelope) => envelope,
                None => break,
            },
        };
        if !commit::<R>(&shared, envelope) {
            break;
        }
    }
    tracing::debug!(screen = name, "update loop stopped");
}

/// Apply one envelope. False once the screen is gone.
fn commit<R: Reducer>(shared: &Shared<R::State>, envelope: Envelope<R::Intent>) -> bool {
    let _commit = shared.commit.lock();
    if shared.lifetime.is_ended() {
        return false;
    }
    match envelope {
        Envelope::Intent(intent) => {
            let current = shared.state.borrow().clone();
            let next = R::reduce(current, intent);
            shared.state.send_if_modified(|slot| {
                if *slot == next {
                    false
                } else {
                    *slot = next;
                    true
                }
            });
        }
        Envelope::Settled => {
            shared
                .unsettled
                .send_modify(|count| *count = count.saturating_sub(1));
        }
    }
    true
}
