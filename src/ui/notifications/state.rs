use crate::domain::Notification;
use crate::ui::mvi::UiState;
use crate::ui::status::LoadStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsState {
    pub status: LoadStatus,
    /// Newest first, at most `limit` entries.
    pub notifications: Vec<Notification>,
    /// Unread notifications across the whole inbox, not just the shown ones.
    pub unread_count: usize,
    pub limit: usize,
}

impl NotificationsState {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

impl UiState for NotificationsState {
    fn status(&self) -> &LoadStatus {
        &self.status
    }
}
