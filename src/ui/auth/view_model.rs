use std::sync::Arc;

use crate::auth::AuthProvider;
use crate::domain::User;
use crate::repository::Repository;
use crate::ui::action::ActionError;
use crate::ui::auth::intent::{AuthIntent, SignedIn};
use crate::ui::auth::reducer::AuthReducer;
use crate::ui::screen::Screen;
use crate::ui::store::ViewStore;

/// Sign-in, sign-up and account maintenance.
///
/// Every outcome, including failures, is folded into [`AuthState`]
/// (`error`/`notice`); the action methods themselves return nothing.
///
/// [`AuthState`]: crate::ui::auth::AuthState
pub struct AuthViewModel {
    store: ViewStore<AuthReducer>,
    auth: Arc<dyn AuthProvider>,
    users: Arc<dyn Repository<User>>,
}

impl AuthViewModel {
    pub fn new(auth: Arc<dyn AuthProvider>, users: Arc<dyn Repository<User>>) -> Self {
        Self {
            store: ViewStore::new("auth"),
            auth,
            users,
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) {
        let Some(_token) = self.store.begin_action("sign_in") else {
            return;
        };
        let request = async {
            let session = self.auth.sign_in(email, password).await?;
            let profile = match self.users.get_by_id(&session.uid).await {
                Ok(profile) => profile,
                Err(err) => {
                    self.end_orphaned_session().await;
                    return Err(err.into());
                }
            };
            Ok::<_, ActionError>(Some(SignedIn { session, profile }))
        };
        self.store.run(request, AuthIntent::Session).await;
    }

    /// Create the account, then its profile document keyed by the new uid.
    pub async fn sign_up(&self, email: &str, password: &str, display_name: &str) {
        let Some(_token) = self.store.begin_action("sign_up") else {
            return;
        };
        let request = async {
            let display_name = display_name.trim();
            if display_name.is_empty() {
                return Err(ActionError::invalid("Display name is required"));
            }
            let session = self.auth.sign_up(email, password).await?;
            let profile = User::student(session.uid.clone(), session.email.clone(), display_name);
            let profile = match self.users.create(profile).await {
                Ok(profile) => profile,
                Err(err) => {
                    self.end_orphaned_session().await;
                    return Err(err.into());
                }
            };
            tracing::info!(uid = %session.uid, "account created");
            Ok(Some(SignedIn {
                session,
                profile: Some(profile),
            }))
        };
        self.store.run(request, AuthIntent::Session).await;
    }

    pub async fn sign_out(&self) {
        let Some(_token) = self.store.begin_action("sign_out") else {
            return;
        };
        let request = async {
            self.auth.sign_out().await?;
            Ok::<_, ActionError>(None)
        };
        self.store.run(request, AuthIntent::Session).await;
    }

    pub async fn send_password_reset(&self, email: &str) {
        let Some(_token) = self.store.begin_action("password_reset") else {
            return;
        };
        let request = async {
            self.auth.send_password_reset(email).await?;
            Ok::<_, ActionError>(email.trim().to_string())
        };
        self.store.run(request, AuthIntent::PasswordReset).await;
    }

    /// Ask the provider whether the address has been verified since sign-in.
    pub async fn refresh_verification(&self) {
        let Some(_token) = self.store.begin_action("verification") else {
            return;
        };
        self.store
            .run(self.auth.reload_and_check_verified(), AuthIntent::Verification)
            .await;
    }

    /// The provider accepted the credentials but the profile step failed;
    /// the screen reports signed out, so the provider must agree.
    async fn end_orphaned_session(&self) {
        if let Err(err) = self.auth.sign_out().await {
            tracing::warn!(error = %err, "could not drop session after profile failure");
        }
    }
}

impl Screen for AuthViewModel {
    type Reducer = AuthReducer;

    fn store(&self) -> &ViewStore<AuthReducer> {
        &self.store
    }

    /// Restore the provider's existing session, if any.
    fn activate(&self) {
        if !self.store.begin_activation() {
            return;
        }
        let auth = Arc::clone(&self.auth);
        let users = Arc::clone(&self.users);
        self.store.load(
            async move {
                let Some(session) = auth.current_session() else {
                    return Ok(None);
                };
                let profile = users.get_by_id(&session.uid).await?;
                Ok::<_, ActionError>(Some(SignedIn { session, profile }))
            },
            AuthIntent::Session,
        );
    }
}
