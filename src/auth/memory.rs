use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use crate::domain::{RecordId, UserId};
use crate::repository::SeedAccount;

use super::{AuthError, AuthProvider, Session};

const MIN_PASSWORD_LEN: usize = 6;

/// Read-only view of whether someone is signed in.
///
/// Handed to the store's write gate so that writes without a session are
/// rejected the way the remote store rejects them.
#[derive(Clone)]
pub struct SessionProbe {
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionProbe {
    pub fn is_signed_in(&self) -> bool {
        self.current.read().is_some()
    }
}

#[derive(Debug, Clone)]
struct Account {
    uid: UserId,
    password: String,
    email_verified: bool,
}

/// Auth provider backed by an in-process account table.
#[derive(Default)]
pub struct MemoryAuth {
    accounts: RwLock<HashMap<String, Account>>,
    current: Arc<RwLock<Option<Session>>>,
    reset_requests: Mutex<Vec<String>>,
    outage: RwLock<Option<String>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_accounts(accounts: &[SeedAccount]) -> Self {
        let auth = Self::new();
        for account in accounts {
            auth.add_account(
                account.uid.clone(),
                &account.email,
                &account.password,
                account.email_verified,
            );
        }
        auth
    }

    pub fn add_account(&self, uid: UserId, email: &str, password: &str, email_verified: bool) {
        self.accounts.write().insert(
            normalize(email),
            Account {
                uid,
                password: password.to_string(),
                email_verified,
            },
        );
    }

    /// Mark an address as verified, as if the user clicked the email link.
    pub fn verify_email(&self, email: &str) -> Result<(), AuthError> {
        let mut accounts = self.accounts.write();
        let account = accounts
            .get_mut(&normalize(email))
            .ok_or_else(|| AuthError::UnknownAccount {
                email: email.to_string(),
            })?;
        account.email_verified = true;
        Ok(())
    }

    /// Make every provider call fail with `message` until cleared.
    pub fn set_outage(&self, message: Option<String>) {
        *self.outage.write() = message;
    }

    /// Addresses a password reset was sent to, oldest first.
    pub fn reset_requests(&self) -> Vec<String> {
        self.reset_requests.lock().clone()
    }

    pub fn probe(&self) -> SessionProbe {
        SessionProbe {
            current: Arc::clone(&self.current),
        }
    }

    fn check_outage(&self) -> Result<(), AuthError> {
        match self.outage.read().as_ref() {
            Some(message) => Err(AuthError::Remote {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn start_session(&self, email: &str, account: &Account) -> Session {
        let session = Session {
            uid: account.uid.clone(),
            email: email.trim().to_string(),
            email_verified: account.email_verified,
        };
        *self.current.write() = Some(session.clone());
        tracing::info!(uid = %session.uid, "session started");
        session
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let trimmed = email.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail {
            email: trimmed.to_string(),
        })
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    fn current_session(&self) -> Option<Session> {
        self.current.read().clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.check_outage()?;
        let account = self
            .accounts
            .read()
            .get(&normalize(email))
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        if account.password != password {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(self.start_session(email, &account))
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.check_outage()?;
        validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }
        let account = {
            let mut accounts = self.accounts.write();
            let key = normalize(email);
            if accounts.contains_key(&key) {
                return Err(AuthError::EmailInUse {
                    email: email.trim().to_string(),
                });
            }
            let account = Account {
                uid: UserId::generate(),
                password: password.to_string(),
                email_verified: false,
            };
            accounts.insert(key, account.clone());
            account
        };
        Ok(self.start_session(email, &account))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.check_outage()?;
        if let Some(session) = self.current.write().take() {
            tracing::info!(uid = %session.uid, "session ended");
        }
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.check_outage()?;
        validate_email(email)?;
        if !self.accounts.read().contains_key(&normalize(email)) {
            return Err(AuthError::UnknownAccount {
                email: email.trim().to_string(),
            });
        }
        self.reset_requests.lock().push(email.trim().to_string());
        Ok(())
    }

    async fn reload_and_check_verified(&self) -> Result<bool, AuthError> {
        self.check_outage()?;
        let mut current = self.current.write();
        let session = current.as_mut().ok_or(AuthError::NotSignedIn)?;
        let verified = self
            .accounts
            .read()
            .get(&normalize(&session.email))
            .map(|account| account.email_verified)
            .unwrap_or(false);
        session.email_verified = verified;
        Ok(verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_checks_password_and_is_case_insensitive_on_email() {
        let auth = MemoryAuth::new();
        auth.add_account(UserId::new("amy"), "amy@uni.edu", "secret1", true);

        assert_eq!(
            auth.sign_in("amy@uni.edu", "wrong").await,
            Err(AuthError::InvalidCredentials)
        );
        let session = auth.sign_in(" AMY@uni.edu", "secret1").await.unwrap();
        assert_eq!(session.uid, UserId::new("amy"));
        assert!(auth.probe().is_signed_in());
    }

    #[tokio::test]
    async fn sign_up_rejects_weak_passwords_and_duplicates() {
        let auth = MemoryAuth::new();
        assert_eq!(
            auth.sign_up("new@uni.edu", "123").await,
            Err(AuthError::WeakPassword { min: 6 })
        );
        let session = auth.sign_up("new@uni.edu", "123456").await.unwrap();
        assert!(!session.email_verified);
        assert!(matches!(
            auth.sign_up("NEW@uni.edu", "123456").await,
            Err(AuthError::EmailInUse { .. })
        ));
    }

    #[tokio::test]
    async fn verification_is_picked_up_on_reload() {
        let auth = MemoryAuth::new();
        auth.sign_up("new@uni.edu", "123456").await.unwrap();
        assert_eq!(auth.reload_and_check_verified().await, Ok(false));
        auth.verify_email("new@uni.edu").unwrap();
        assert_eq!(auth.reload_and_check_verified().await, Ok(true));
        assert!(auth.current_session().unwrap().email_verified);
    }

    #[tokio::test]
    async fn reload_without_session_fails() {
        let auth = MemoryAuth::new();
        assert_eq!(
            auth.reload_and_check_verified().await,
            Err(AuthError::NotSignedIn)
        );
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@b.co").is_err());
        assert!(validate_email("a@nodot").is_err());
    }
}
