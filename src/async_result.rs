//! Tagged outcome of an asynchronous fetch.

use std::fmt::Display;

/// Outcome of one asynchronous read or write.
///
/// A one-shot producer announces `Pending` at most once and then settles on
/// exactly one terminal variant. Live subscriptions keep emitting `Success`
/// values until they are dropped, or end with a single `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncResult<T> {
    /// The request is in flight.
    Pending,
    /// The request produced a value.
    Success(T),
    /// The request failed; the message is shown to the user verbatim.
    Failure(String),
}

impl<T> AsyncResult<T> {
    /// Build a failure from anything displayable.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// True for `Success` and `Failure`.
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Transform the success payload, leaving the other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AsyncResult<U> {
        match self {
            Self::Pending => AsyncResult::Pending,
            Self::Success(value) => AsyncResult::Success(f(value)),
            Self::Failure(message) => AsyncResult::Failure(message),
        }
    }

    /// Borrow the success payload, if any.
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Take the success payload, if any.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for AsyncResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}
