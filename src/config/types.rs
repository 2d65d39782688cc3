use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ui::club_browse::ALL_CATEGORIES;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Screen defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Category selected when the club browser opens (default: "All").
    #[serde(default = "default_category")]
    pub category: String,
    /// How many days ahead the home screen lists events (default: 30).
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: u32,
    /// Maximum notifications kept on screen (default: 50).
    #[serde(default = "default_notification_limit")]
    pub notification_limit: usize,
}

/// Settings for the in-process document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file with initial records. Built-in demo data when unset.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
    /// Reject writes while nobody is signed in (default: true).
    #[serde(default = "default_require_session")]
    pub require_session_for_writes: bool,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_upcoming_window_days() -> u32 {
    30
}

fn default_notification_limit() -> usize {
    50
}

fn default_require_session() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            category: default_category(),
            upcoming_window_days: default_upcoming_window_days(),
            notification_limit: default_notification_limit(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            require_session_for_writes: default_require_session(),
        }
    }
}
