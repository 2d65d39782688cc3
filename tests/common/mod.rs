//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod flaky;
pub mod scripted;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use clubhub::auth::{AuthProvider, MemoryAuth};
use clubhub::domain::{
    Club, ClubId, ClubStatus, Event, EventId, MembershipRequest, Notification, RequestId,
    RequestStatus, Role, User, UserId,
};
use clubhub::repository::{MemoryStore, Repositories, Seed, SeedAccount, WriteGate};
use clubhub::ui::mvi::Reducer;
use clubhub::ui::ViewStore;

pub use flaky::FlakyWrites;
pub use scripted::ScriptedRepository;

/// How long a test waits for a state before giving up.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Wait until the store publishes a state matching `predicate`.
pub async fn eventually<R: Reducer>(
    store: &ViewStore<R>,
    predicate: impl FnMut(&R::State) -> bool,
) -> R::State {
    tokio::time::timeout(SETTLE_TIMEOUT, store.wait_for(predicate))
        .await
        .expect("state did not reach the expected shape in time")
}

/// Wait until every bound source has delivered its first result.
pub async fn settled<R: Reducer>(store: &ViewStore<R>) -> R::State {
    tokio::time::timeout(SETTLE_TIMEOUT, store.settled())
        .await
        .expect("screen did not settle in time")
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, day, hour, 0, 0).unwrap()
}

pub fn club(id: &str, name: &str, category: &str, leader: &str, members: &[&str]) -> Club {
    Club {
        id: ClubId::new(id),
        name: name.to_string(),
        description: format!("{name} description"),
        category: category.to_string(),
        leader_id: UserId::new(leader),
        members: members.iter().map(|m| UserId::new(*m)).collect(),
        status: ClubStatus::Active,
        created_at: at(1, 9),
    }
}

pub fn user(uid: &str, name: &str, role: Role) -> User {
    let mut user = User::student(UserId::new(uid), format!("{uid}@uni.edu"), name);
    user.role = role;
    user
}

/// An event `days` from now.
pub fn event_in(id: &str, club: &str, title: &str, days: i64) -> Event {
    Event {
        id: EventId::new(id),
        club_id: ClubId::new(club),
        title: title.to_string(),
        description: String::new(),
        location: "Hall A".to_string(),
        starts_at: Utc::now() + ChronoDuration::days(days),
    }
}

pub fn pending_request(id: &str, club: &str, user: &str) -> MembershipRequest {
    MembershipRequest {
        id: RequestId::new(id),
        club_id: ClubId::new(club),
        user_id: UserId::new(user),
        status: RequestStatus::Pending,
        created_at: at(5, 12),
    }
}

pub fn account(uid: &str, password: &str, verified: bool) -> SeedAccount {
    SeedAccount {
        uid: UserId::new(uid),
        email: format!("{uid}@uni.edu"),
        password: password.to_string(),
        email_verified: verified,
    }
}

/// A small campus: admin `ada`, leader `lee` running `chess` (with member
/// `amy`) and `soccer`, students `amy` and `bob`.
pub fn campus() -> Seed {
    Seed {
        accounts: vec![
            account("ada", "admin-pass", true),
            account("lee", "leader-pass", true),
            account("amy", "student-pass", true),
            account("bob", "student-pass", false),
        ],
        users: vec![
            user("ada", "Ada", Role::Admin),
            user("lee", "Lee", Role::ClubLeader),
            user("amy", "Amy", Role::Student),
            user("bob", "Bob", Role::Student),
        ],
        clubs: vec![
            club("chess", "Chess Club", "Academic", "lee", &["lee", "amy"]),
            club("soccer", "Soccer", "Sports", "lee", &["lee"]),
        ],
        events: vec![
            event_in("blitz", "chess", "Blitz night", 3),
            event_in("derby", "soccer", "Derby", 10),
            event_in("far", "chess", "Far away", 90),
        ],
        ..Seed::default()
    }
}

/// In-memory services seeded with `seed`.
pub struct World {
    pub auth: Arc<MemoryAuth>,
    pub store: MemoryStore,
    pub repos: Repositories,
}

impl World {
    /// Writes are open to everyone.
    pub fn open(seed: &Seed) -> Self {
        let auth = Arc::new(MemoryAuth::from_accounts(&seed.accounts));
        let store = MemoryStore::seeded(seed, WriteGate::open());
        let repos = store.repositories();
        Self { auth, store, repos }
    }

    /// Writes need a signed-in session.
    pub fn gated(seed: &Seed) -> Self {
        let auth = Arc::new(MemoryAuth::from_accounts(&seed.accounts));
        let store = MemoryStore::seeded(seed, WriteGate::requiring_session(auth.probe()));
        let repos = store.repositories();
        Self { auth, store, repos }
    }

    pub async fn sign_in_as(&self, uid: &str, password: &str) {
        self.auth
            .sign_in(&format!("{uid}@uni.edu"), password)
            .await
            .expect("seeded credentials");
    }
}
