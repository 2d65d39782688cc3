use crate::async_result::AsyncResult;
use crate::ui::auth::intent::AuthIntent;
use crate::ui::auth::state::AuthState;
use crate::ui::mvi::Reducer;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::Session(result) => {
                let status = state.status.clone().merge(&result);
                match result {
                    AsyncResult::Success(Some(signed_in)) => AuthState {
                        status,
                        is_authenticated: true,
                        is_email_verified: signed_in.session.email_verified,
                        user: Some(signed_in.session),
                        profile: signed_in.profile,
                        notice: None,
                    },
                    AsyncResult::Success(None) => AuthState {
                        status,
                        ..AuthState::default()
                    },
                    AsyncResult::Pending | AsyncResult::Failure(_) => AuthState {
                        status,
                        notice: None,
                        ..state
                    },
                }
            }
            AuthIntent::PasswordReset(result) => {
                let status = state.status.clone().merge(&result);
                let notice = match result {
                    AsyncResult::Success(email) => Some(format!("Password reset email sent to {email}")),
                    _ => None,
                };
                AuthState {
                    status,
                    notice,
                    ..state
                }
            }
            AuthIntent::Verification(result) => {
                let status = state.status.clone().merge(&result);
                match result {
                    AsyncResult::Success(verified) => {
                        let notice = (!verified).then(|| {
                            "Email not verified yet. Check your inbox for the link.".to_string()
                        });
                        let user = state.user.map(|mut session| {
                            session.email_verified = verified;
                            session
                        });
                        AuthState {
                            status,
                            is_email_verified: verified,
                            user,
                            notice,
                            ..state
                        }
                    }
                    _ => AuthState {
                        status,
                        notice: None,
                        ..state
                    },
                }
            }
        }
    }
}
