//! Common surface of every screen aggregator.

use tokio::sync::watch;

use crate::ui::mvi::Reducer;
use crate::ui::store::ViewStore;

/// A screen's view model: a [`ViewStore`] plus the collaborators its
/// subscriptions and actions need.
pub trait Screen {
    type Reducer: Reducer;

    fn store(&self) -> &ViewStore<Self::Reducer>;

    /// Start every subscription the screen needs. Calling it again does
    /// nothing.
    fn activate(&self);

    fn snapshot(&self) -> <Self::Reducer as Reducer>::State {
        self.store().snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<<Self::Reducer as Reducer>::State> {
        self.store().subscribe()
    }

    fn teardown(&self) {
        self.store().teardown();
    }
}
