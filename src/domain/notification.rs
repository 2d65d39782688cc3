use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityPatch, EntityQuery, NotificationId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// An unread notification addressed to `user_id`, id assigned on create.
    pub fn to(user_id: UserId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: NotificationId::default(),
            user_id,
            title: title.into(),
            body: body.into(),
            read: false,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationQuery {
    ForUser(UserId),
    UnreadForUser(UserId),
}

impl EntityQuery<Notification> for NotificationQuery {
    fn matches(&self, notification: &Notification) -> bool {
        match self {
            Self::ForUser(user) => notification.user_id == *user,
            Self::UnreadForUser(user) => notification.user_id == *user && !notification.read,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationPatch {
    MarkRead,
}

impl EntityPatch<Notification> for NotificationPatch {
    fn apply(self, notification: &mut Notification) {
        match self {
            Self::MarkRead => notification.read = true,
        }
    }
}

impl Entity for Notification {
    type Id = NotificationId;
    type Query = NotificationQuery;
    type Patch = NotificationPatch;

    const COLLECTION: &'static str = "notifications";

    fn id(&self) -> &NotificationId {
        &self.id
    }

    fn set_id(&mut self, id: NotificationId) {
        self.id = id;
    }

    fn display_order(&self, other: &Self) -> Ordering {
        other.created_at.cmp(&self.created_at)
    }
}
