//! Club-management application core.
//!
//! Screens are represented by view models ([`ui::Screen`]) that subscribe to
//! live queries on a document store ([`repository::Repository`]), fold every
//! [`AsyncResult`](async_result::AsyncResult) into one state record, and
//! publish that record as an observable snapshot. An in-memory store and
//! auth provider stand in for the remote services.

pub mod async_result;
pub mod auth;
pub mod config;
pub mod domain;
pub mod logging;
pub mod nav;
pub mod repository;
pub mod ui;
