use std::sync::Arc;

use crate::domain::{Notification, NotificationId, NotificationPatch, NotificationQuery, UserId};
use crate::repository::{Repository, RepositoryError};
use crate::ui::notifications::intent::NotificationsIntent;
use crate::ui::notifications::reducer::NotificationsReducer;
use crate::ui::notifications::state::NotificationsState;
use crate::ui::screen::Screen;
use crate::ui::store::ViewStore;

/// The signed-in user's inbox.
///
/// Writes are reflected through the live query; a failed write is folded
/// into the state's `error` rather than returned.
pub struct NotificationsViewModel {
    store: ViewStore<NotificationsReducer>,
    notifications: Arc<dyn Repository<Notification>>,
    user: UserId,
}

impl NotificationsViewModel {
    pub fn new(notifications: Arc<dyn Repository<Notification>>, user: UserId, limit: usize) -> Self {
        Self {
            store: ViewStore::with_state("notifications", NotificationsState::with_limit(limit)),
            notifications,
            user,
        }
    }

    pub async fn mark_read(&self, id: &NotificationId) {
        let Some(_token) = self.store.begin_action(format!("mark_read:{id}")) else {
            return;
        };
        let result = self.notifications.update(id, NotificationPatch::MarkRead).await;
        self.fold_failure(result);
    }

    /// Mark every unread notification on screen as read. Stops at the
    /// first failure.
    pub async fn mark_all_read(&self) {
        let Some(_token) = self.store.begin_action("mark_all_read") else {
            return;
        };
        let unread: Vec<NotificationId> = self
            .store
            .snapshot()
            .notifications
            .into_iter()
            .filter(|notification| !notification.read)
            .map(|notification| notification.id)
            .collect();
        for id in &unread {
            if let Err(err) = self.notifications.update(id, NotificationPatch::MarkRead).await {
                self.fold_failure(Err(err));
                return;
            }
        }
        tracing::info!(user = %self.user, count = unread.len(), "notifications marked read");
    }

    pub async fn delete(&self, id: &NotificationId) {
        let Some(_token) = self.store.begin_action(format!("delete:{id}")) else {
            return;
        };
        let result = self.notifications.delete(id).await;
        self.fold_failure(result);
    }

    fn fold_failure(&self, result: Result<(), RepositoryError>) {
        if let Err(err) = result {
            tracing::warn!(user = %self.user, error = %err, "notification update failed");
            self.store
                .dispatch(NotificationsIntent::ActionFailed(err.to_string()));
        }
    }
}

impl Screen for NotificationsViewModel {
    type Reducer = NotificationsReducer;

    fn store(&self) -> &ViewStore<NotificationsReducer> {
        &self.store
    }

    fn activate(&self) {
        if !self.store.begin_activation() {
            return;
        }
        self.store.bind(
            self.notifications
                .query_stream(NotificationQuery::ForUser(self.user.clone())),
            NotificationsIntent::Loaded,
        );
    }
}
