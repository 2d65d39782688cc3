use crate::domain::{ClubApplication, Role, User};
use crate::ui::mvi::UiState;
use crate::ui::status::LoadStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub status: LoadStatus,
    /// Applications awaiting review, oldest first.
    pub applications: Vec<ClubApplication>,
    pub users: Vec<User>,
}

impl AdminState {
    pub fn users_with_role(&self, role: Role) -> impl Iterator<Item = &User> {
        self.users.iter().filter(move |user| user.role == role)
    }
}

impl UiState for AdminState {
    fn status(&self) -> &LoadStatus {
        &self.status
    }
}
