use serde::{Deserialize, Serialize};

use super::{Entity, EntityPatch, EntityQuery, UserId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    ClubLeader,
    Admin,
}

/// Profile record keyed by the auth uid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub uid: UserId,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    /// A fresh student profile for a newly registered account.
    pub fn student(uid: UserId, email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            uid,
            email: email.into(),
            display_name: display_name.into(),
            role: Role::Student,
            active: true,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    All,
    WithRole(Role),
}

impl EntityQuery<User> for UserQuery {
    fn matches(&self, user: &User) -> bool {
        match self {
            Self::All => true,
            Self::WithRole(role) => user.role == *role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserPatch {
    SetRole(Role),
    SetActive(bool),
    DisplayName(String),
}

impl EntityPatch<User> for UserPatch {
    fn apply(self, user: &mut User) {
        match self {
            Self::SetRole(role) => user.role = role,
            Self::SetActive(active) => user.active = active,
            Self::DisplayName(name) => user.display_name = name,
        }
    }
}

impl Entity for User {
    type Id = UserId;
    type Query = UserQuery;
    type Patch = UserPatch;

    const COLLECTION: &'static str = "users";

    fn id(&self) -> &UserId {
        &self.uid
    }

    fn set_id(&mut self, id: UserId) {
        self.uid = id;
    }

    fn display_order(&self, other: &Self) -> std::cmp::Ordering {
        self.display_name
            .to_lowercase()
            .cmp(&other.display_name.to_lowercase())
    }
}
