use crate::async_result::AsyncResult;
use crate::auth::Session;
use crate::domain::User;
use crate::ui::mvi::Intent;

/// Session plus profile, as established by sign-in, sign-up or restore.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub session: Session,
    pub profile: Option<User>,
}

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// `Success(None)` means signed out.
    Session(AsyncResult<Option<SignedIn>>),
    /// Success carries the address the reset email went to.
    PasswordReset(AsyncResult<String>),
    Verification(AsyncResult<bool>),
}

impl Intent for AuthIntent {}
