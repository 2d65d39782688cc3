//! Errors returned by action methods.

use thiserror::Error;

use crate::auth::AuthError;
use crate::repository::RepositoryError;

/// Why a user action did not complete.
///
/// Returned to the caller by aggregators that report action outcomes
/// explicitly; aggregators that fold failures into state use the message
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("'{action}' is already in progress")]
    InFlight { action: String },

    #[error("{reason}")]
    NotPermitted { reason: String },

    #[error("{reason}")]
    Invalid { reason: String },

    #[error("This screen has been closed")]
    Closed,
}

impl ActionError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    pub fn not_permitted(reason: impl Into<String>) -> Self {
        Self::NotPermitted {
            reason: reason.into(),
        }
    }
}
