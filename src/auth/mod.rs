//! Authentication provider contract.
//!
//! The provider owns credentials and the current session. Aggregators never
//! read the session from ambient state: whoever constructs a screen passes
//! the signed-in [`Session`] (or its uid) in explicitly.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::UserId;

pub use memory::{MemoryAuth, SessionProbe};

/// Identity of the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uid: UserId,
    pub email: String,
    pub email_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("An account already exists for {email}")]
    EmailInUse { email: String },

    #[error("Password must be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },

    #[error("No account is signed in")]
    NotSignedIn,

    #[error("No account found for {email}")]
    UnknownAccount { email: String },

    #[error("{message}")]
    Remote { message: String },
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The signed-in session, if any.
    fn current_session(&self) -> Option<Session>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Create an account and sign it in. The new account is unverified.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Refresh the session from the provider and report whether the email
    /// address has been verified since sign-in.
    async fn reload_and_check_verified(&self) -> Result<bool, AuthError>;
}
