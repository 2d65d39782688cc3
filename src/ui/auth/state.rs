use crate::auth::Session;
use crate::domain::User;
use crate::ui::mvi::UiState;
use crate::ui::status::LoadStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: LoadStatus,
    pub is_authenticated: bool,
    pub user: Option<Session>,
    /// Profile document of the signed-in user, when one exists.
    pub profile: Option<User>,
    pub is_email_verified: bool,
    /// Confirmation text for the last completed request.
    pub notice: Option<String>,
}

impl UiState for AuthState {
    fn status(&self) -> &LoadStatus {
        &self.status
    }
}
