//! Screen aggregators and the runtime they share.
//!
//! Each screen is a view model implementing [`Screen`]: it owns a
//! [`ViewStore`] holding the screen's state record, binds the live queries
//! the screen needs on activation, and exposes the user actions the screen
//! offers.

pub mod action;
pub mod admin;
pub mod auth;
pub mod club_browse;
pub mod club_detail;
pub mod guard;
pub mod leader_dashboard;
pub mod lifecycle;
pub mod mvi;
pub mod notifications;
pub mod screen;
pub mod status;
pub mod store;
pub mod student_home;

pub use action::ActionError;
pub use screen::Screen;
pub use status::{LoadStatus, Phase};
pub use store::ViewStore;
