use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{ClubId, Entity, EntityPatch, EntityQuery, EventId, RegistrationId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub club_id: ClubId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub starts_at: DateTime<Utc>,
}

/// Half-open time range `[from, until)` used for "upcoming" listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl EventWindow {
    pub fn starting_at(from: DateTime<Utc>, days: u32) -> Self {
        Self {
            from,
            until: from + Duration::days(i64::from(days)),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at < self.until
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventQuery {
    ForClub(ClubId),
    ForClubs(Vec<ClubId>),
    Upcoming(EventWindow),
}

impl EntityQuery<Event> for EventQuery {
    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::ForClub(club) => event.club_id == *club,
            Self::ForClubs(clubs) => clubs.contains(&event.club_id),
            Self::Upcoming(window) => window.contains(event.starts_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPatch {
    Reschedule(DateTime<Utc>),
    Relocate(String),
}

impl EntityPatch<Event> for EventPatch {
    fn apply(self, event: &mut Event) {
        match self {
            Self::Reschedule(at) => event.starts_at = at,
            Self::Relocate(location) => event.location = location,
        }
    }
}

impl Entity for Event {
    type Id = EventId;
    type Query = EventQuery;
    type Patch = EventPatch;

    const COLLECTION: &'static str = "events";

    fn id(&self) -> &EventId {
        &self.id
    }

    fn set_id(&mut self, id: EventId) {
        self.id = id;
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.starts_at.cmp(&other.starts_at)
    }
}

/// A user's sign-up for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRegistration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRegistrationQuery {
    ForUser(UserId),
    ForEvent(EventId),
}

impl EntityQuery<EventRegistration> for EventRegistrationQuery {
    fn matches(&self, registration: &EventRegistration) -> bool {
        match self {
            Self::ForUser(user) => registration.user_id == *user,
            Self::ForEvent(event) => registration.event_id == *event,
        }
    }
}

/// Registrations are created and deleted, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRegistrationPatch {}

impl EntityPatch<EventRegistration> for EventRegistrationPatch {
    fn apply(self, _registration: &mut EventRegistration) {
        match self {}
    }
}

impl Entity for EventRegistration {
    type Id = RegistrationId;
    type Query = EventRegistrationQuery;
    type Patch = EventRegistrationPatch;

    const COLLECTION: &'static str = "eventRegistrations";

    fn id(&self) -> &RegistrationId {
        &self.id
    }

    fn set_id(&mut self, id: RegistrationId) {
        self.id = id;
    }
}
