//! Shared loading/error flags and the merge rule every aggregator follows.

use crate::async_result::AsyncResult;

/// Lifecycle of an aggregator, derived from its [`LoadStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// At least one result has been merged.
    Ready,
    /// A request failed before anything succeeded.
    Failed,
}

/// Record-wide loading and error flags.
///
/// `is_loading` and `error` are mutually exclusive: a new request clears the
/// previous error, and any terminal result clears the loading flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStatus {
    pub is_loading: bool,
    pub error: Option<String>,
    /// Set by the first successful merge and never cleared.
    pub loaded: bool,
}

impl LoadStatus {
    pub fn pending(self) -> Self {
        Self {
            is_loading: true,
            error: None,
            ..self
        }
    }

    pub fn succeeded(self) -> Self {
        Self {
            is_loading: false,
            error: None,
            loaded: true,
        }
    }

    pub fn failed(self, message: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(message.into()),
            ..self
        }
    }

    /// Apply the flag half of the merge rule for `result`.
    pub fn merge<T>(self, result: &AsyncResult<T>) -> Self {
        match result {
            AsyncResult::Pending => self.pending(),
            AsyncResult::Success(_) => self.succeeded(),
            AsyncResult::Failure(message) => self.failed(message.clone()),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.loaded {
            Phase::Ready
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Idle
        }
    }
}

/// Merge one subscription's result into the field it owns.
///
/// `Success` replaces the field; `Pending` and `Failure` keep what is there
/// so that data from earlier merges stays visible next to an error.
pub fn merge_field<T>(status: LoadStatus, field: T, result: AsyncResult<T>) -> (LoadStatus, T) {
    match result {
        AsyncResult::Pending => (status.pending(), field),
        AsyncResult::Success(value) => (status.succeeded(), value),
        AsyncResult::Failure(message) => (status.failed(message), field),
    }
}
