//! Fixture data for the in-memory store and auth provider.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    Announcement, Club, ClubApplication, Event, EventRegistration, MembershipRequest,
    Notification, User, UserId,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed data: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
    },
}

/// Credentials for an account known to the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    pub uid: UserId,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub email_verified: bool,
}

/// Contents of every collection, as loaded from a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub registrations: Vec<EventRegistration>,
    #[serde(default)]
    pub membership_requests: Vec<MembershipRequest>,
    #[serde(default)]
    pub applications: Vec<ClubApplication>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

impl Seed {
    pub fn from_json(content: &str) -> Result<Self, SeedError> {
        serde_json::from_str(content).map_err(|source| SeedError::ParseError { source })
    }

    pub fn load_from(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}
