use crate::async_result::AsyncResult;
use crate::domain::Notification;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NotificationsIntent {
    Loaded(AsyncResult<Vec<Notification>>),
    /// A write failed; the message is shown like any other error.
    ActionFailed(String),
}

impl Intent for NotificationsIntent {}
