//! In-process document store.
//!
//! Honours the [`Repository`] contract the same way the remote store does:
//! writes are visible to every live query over the same collection, live
//! queries re-emit only when their result set changes, and faults can be
//! injected per collection to exercise failure paths.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::watch;

use crate::auth::SessionProbe;
use crate::domain::{
    Announcement, Club, ClubApplication, Entity, EntityPatch, EntityQuery, Event,
    EventRegistration, MembershipRequest, Notification, RecordId, User,
};

use super::{Repositories, Repository, RepositoryError, Seed, Subscription};

/// Decides whether writes need a signed-in session.
#[derive(Clone, Default)]
pub struct WriteGate {
    session: Option<SessionProbe>,
}

impl WriteGate {
    /// Writes are always allowed.
    pub fn open() -> Self {
        Self::default()
    }

    /// Writes are rejected with `NotAuthenticated` while nobody is signed in.
    pub fn requiring_session(probe: SessionProbe) -> Self {
        Self {
            session: Some(probe),
        }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match &self.session {
            Some(probe) if !probe.is_signed_in() => Err(RepositoryError::NotAuthenticated),
            _ => Ok(()),
        }
    }
}

/// One collection of records of kind `E`.
pub struct MemoryCollection<E: Entity> {
    records: Arc<RwLock<Vec<E>>>,
    fault: Arc<RwLock<Option<String>>>,
    revision: watch::Sender<u64>,
    gate: WriteGate,
}

impl<E: Entity> MemoryCollection<E> {
    pub fn new(gate: WriteGate) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            fault: Arc::new(RwLock::new(None)),
            revision,
            gate,
        }
    }

    /// Insert a record directly, bypassing the write gate. Used for seeding.
    pub fn insert(&self, mut entity: E) -> E {
        if entity.id().is_blank() {
            entity.set_id(E::Id::generate());
        }
        self.records.write().push(entity.clone());
        self.bump();
        entity
    }

    /// Make every operation on this collection fail with `message` until
    /// cleared. Live queries already running emit the failure and end.
    pub fn set_fault(&self, message: Option<String>) {
        *self.fault.write() = message;
        self.bump();
    }

    /// Current contents in insertion order.
    pub fn records(&self) -> Vec<E> {
        self.records.read().clone()
    }

    /// Number of live queries currently attached.
    pub fn live_queries(&self) -> usize {
        self.revision.receiver_count()
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    fn check_fault(&self) -> Result<(), RepositoryError> {
        match self.fault.read().as_ref() {
            Some(message) => Err(RepositoryError::remote(message.clone())),
            None => Ok(()),
        }
    }
}

fn matching<E: Entity>(records: &[E], query: &E::Query) -> Vec<E> {
    let mut matching: Vec<E> = records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.display_order(b));
    matching
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryCollection<E> {
    async fn get_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError> {
        self.check_fault()?;
        Ok(self
            .records
            .read()
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    fn query_stream(&self, query: E::Query) -> Subscription<Vec<E>> {
        if let Err(err) = self.check_fault() {
            return Subscription::failed(err.to_string());
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return Subscription::failed("live queries need a running async runtime");
        };

        let (sender, subscription) = Subscription::channel();
        sender.pending();

        let records = Arc::clone(&self.records);
        let fault = Arc::clone(&self.fault);
        let mut revisions = self.revision.subscribe();

        runtime.spawn(async move {
            let mut last_sent: Option<Vec<E>> = None;
            loop {
                let fault_message = fault.read().clone();
                if let Some(message) = fault_message {
                    sender.failure(message);
                    break;
                }

                let current = matching(&records.read(), &query);
                if last_sent.as_ref() != Some(&current) {
                    if !sender.success(current.clone()) {
                        break;
                    }
                    last_sent = Some(current);
                }

                tokio::select! {
                    _ = sender.closed() => break,
                    changed = revisions.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::trace!(collection = E::COLLECTION, ?query, "live query closed");
        });

        subscription
    }

    async fn create(&self, mut entity: E) -> Result<E, RepositoryError> {
        self.check_fault()?;
        self.gate.check()?;
        if entity.id().is_blank() {
            entity.set_id(E::Id::generate());
        }
        {
            let mut records = self.records.write();
            if records.iter().any(|record| record.id() == entity.id()) {
                return Err(RepositoryError::AlreadyExists {
                    collection: E::COLLECTION,
                    id: entity.id().to_string(),
                });
            }
            records.push(entity.clone());
        }
        self.bump();
        tracing::debug!(collection = E::COLLECTION, id = %entity.id(), "record created");
        Ok(entity)
    }

    async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<(), RepositoryError> {
        self.check_fault()?;
        self.gate.check()?;
        {
            let mut records = self.records.write();
            let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
                return Err(RepositoryError::Missing {
                    collection: E::COLLECTION,
                    id: id.to_string(),
                });
            };
            patch.apply(record);
        }
        self.bump();
        tracing::debug!(collection = E::COLLECTION, %id, "record updated");
        Ok(())
    }

    async fn delete(&self, id: &E::Id) -> Result<(), RepositoryError> {
        self.check_fault()?;
        self.gate.check()?;
        {
            let mut records = self.records.write();
            let before = records.len();
            records.retain(|record| record.id() != id);
            if records.len() == before {
                return Err(RepositoryError::Missing {
                    collection: E::COLLECTION,
                    id: id.to_string(),
                });
            }
        }
        self.bump();
        tracing::debug!(collection = E::COLLECTION, %id, "record deleted");
        Ok(())
    }
}

/// Every collection the application uses.
pub struct MemoryStore {
    pub clubs: Arc<MemoryCollection<Club>>,
    pub users: Arc<MemoryCollection<User>>,
    pub events: Arc<MemoryCollection<Event>>,
    pub registrations: Arc<MemoryCollection<EventRegistration>>,
    pub membership_requests: Arc<MemoryCollection<MembershipRequest>>,
    pub applications: Arc<MemoryCollection<ClubApplication>>,
    pub notifications: Arc<MemoryCollection<Notification>>,
    pub announcements: Arc<MemoryCollection<Announcement>>,
}

impl MemoryStore {
    pub fn new(gate: WriteGate) -> Self {
        Self {
            clubs: Arc::new(MemoryCollection::new(gate.clone())),
            users: Arc::new(MemoryCollection::new(gate.clone())),
            events: Arc::new(MemoryCollection::new(gate.clone())),
            registrations: Arc::new(MemoryCollection::new(gate.clone())),
            membership_requests: Arc::new(MemoryCollection::new(gate.clone())),
            applications: Arc::new(MemoryCollection::new(gate.clone())),
            notifications: Arc::new(MemoryCollection::new(gate.clone())),
            announcements: Arc::new(MemoryCollection::new(gate)),
        }
    }

    /// A store pre-populated with the records of `seed`.
    pub fn seeded(seed: &Seed, gate: WriteGate) -> Self {
        let store = Self::new(gate);
        for user in &seed.users {
            store.users.insert(user.clone());
        }
        for club in &seed.clubs {
            store.clubs.insert(club.clone());
        }
        for event in &seed.events {
            store.events.insert(event.clone());
        }
        for registration in &seed.registrations {
            store.registrations.insert(registration.clone());
        }
        for request in &seed.membership_requests {
            store.membership_requests.insert(request.clone());
        }
        for application in &seed.applications {
            store.applications.insert(application.clone());
        }
        for notification in &seed.notifications {
            store.notifications.insert(notification.clone());
        }
        for announcement in &seed.announcements {
            store.announcements.insert(announcement.clone());
        }
        tracing::info!(
            users = seed.users.len(),
            clubs = seed.clubs.len(),
            events = seed.events.len(),
            "memory store seeded"
        );
        store
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            clubs: self.clubs.clone(),
            users: self.users.clone(),
            events: self.events.clone(),
            registrations: self.registrations.clone(),
            membership_requests: self.membership_requests.clone(),
            applications: self.applications.clone(),
            notifications: self.notifications.clone(),
            announcements: self.announcements.clone(),
        }
    }
}
