//! Application configuration.
//!
//! Loaded from `~/.config/clubhub/config.toml` (or an explicit path). A
//! missing file yields the defaults.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, Defaults, StoreConfig};
