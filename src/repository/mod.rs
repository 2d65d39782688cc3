//! Repository facade over the remote document store.
//!
//! Every record kind is reached through the same [`Repository`] contract:
//! one-shot reads and writes return `Result`, live queries return a
//! [`Subscription`] of [`AsyncResult`](crate::async_result::AsyncResult)
//! values. Absent records are `Ok(None)`, never an error.

mod memory;
mod seed;
mod subscription;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    Announcement, Club, ClubApplication, Entity, Event, EventRegistration, MembershipRequest,
    Notification, User,
};

pub use memory::{MemoryCollection, MemoryStore, WriteGate};
pub use seed::{Seed, SeedAccount, SeedError};
pub use subscription::{Subscription, SubscriptionSender};

/// Errors surfaced by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The operation needs a signed-in session and there is none.
    #[error("You need to be signed in to do that")]
    NotAuthenticated,

    /// Network or service failure; the message is forwarded verbatim.
    #[error("{message}")]
    Remote { message: String },

    /// Update or delete of a record that does not exist.
    #[error("{collection} record '{id}' does not exist")]
    Missing { collection: &'static str, id: String },

    /// Create with an id that is already taken.
    #[error("{collection} record '{id}' already exists")]
    AlreadyExists { collection: &'static str, id: String },
}

impl RepositoryError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }
}

/// Read/write/subscribe access to one collection.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Single read; completes once.
    async fn get_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError>;

    /// Live query. Emits `Pending` immediately, then a `Success` whenever the
    /// matching set changes, until the subscription is dropped.
    fn query_stream(&self, query: E::Query) -> Subscription<Vec<E>>;

    /// Store a new record. A blank id is replaced with a generated one.
    async fn create(&self, entity: E) -> Result<E, RepositoryError>;

    async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &E::Id) -> Result<(), RepositoryError>;
}

/// One repository per collection, shared by every screen.
#[derive(Clone)]
pub struct Repositories {
    pub clubs: Arc<dyn Repository<Club>>,
    pub users: Arc<dyn Repository<User>>,
    pub events: Arc<dyn Repository<Event>>,
    pub registrations: Arc<dyn Repository<EventRegistration>>,
    pub membership_requests: Arc<dyn Repository<MembershipRequest>>,
    pub applications: Arc<dyn Repository<ClubApplication>>,
    pub notifications: Arc<dyn Repository<Notification>>,
    pub announcements: Arc<dyn Repository<Announcement>>,
}
