//! Records stored in the remote document store.
//!
//! The aggregation layer treats these as opaque payloads: it filters and
//! displays them, and forwards writes, but never reshapes them. Each record
//! kind names its collection and declares a closed query enum and a closed
//! patch enum, so every filter the UI can ask for is enumerated here.

mod club;
mod event;
mod ids;
mod notification;
mod user;

use std::cmp::Ordering;
use std::fmt;

pub use club::{
    Announcement, AnnouncementPatch, AnnouncementQuery, ApplicationStatus, Club,
    ClubApplication, ClubApplicationPatch, ClubApplicationQuery, ClubPatch, ClubQuery,
    ClubStatus, MembershipRequest, MembershipRequestPatch, MembershipRequestQuery,
    RequestStatus,
};
pub use event::{
    Event, EventPatch, EventQuery, EventRegistration, EventRegistrationPatch,
    EventRegistrationQuery, EventWindow,
};
pub use ids::{
    AnnouncementId, ApplicationId, ClubId, EventId, NotificationId, RecordId, RegistrationId,
    RequestId, UserId,
};
pub use notification::{Notification, NotificationPatch, NotificationQuery};
pub use user::{Role, User, UserPatch, UserQuery};

/// A record kind held in one named collection.
pub trait Entity: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    type Id: RecordId;
    type Query: EntityQuery<Self>;
    type Patch: EntityPatch<Self>;

    /// Name of the backing collection in the document store.
    const COLLECTION: &'static str;

    fn id(&self) -> &Self::Id;

    fn set_id(&mut self, id: Self::Id);

    /// Order in which query results are delivered. Records that compare
    /// equal keep their insertion order.
    fn display_order(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

/// A closed set of filters for one record kind.
pub trait EntityQuery<E>: Clone + fmt::Debug + Send + Sync + 'static {
    fn matches(&self, entity: &E) -> bool;
}

/// A closed set of partial updates for one record kind.
pub trait EntityPatch<E>: fmt::Debug + Send + 'static {
    fn apply(self, entity: &mut E);
}
