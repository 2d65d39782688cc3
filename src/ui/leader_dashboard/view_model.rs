use chrono::{DateTime, Utc};

use crate::domain::{
    Announcement, AnnouncementId, AnnouncementQuery, Club, ClubId, ClubPatch, ClubQuery, Event,
    EventId, EventQuery, MembershipRequestPatch, MembershipRequestQuery, Notification, RequestId,
    RequestStatus, UserId,
};
use crate::repository::Repositories;
use crate::ui::action::ActionError;
use crate::ui::leader_dashboard::intent::LeaderDashboardIntent;
use crate::ui::leader_dashboard::reducer::LeaderDashboardReducer;
use crate::ui::leader_dashboard::state::LeaderDashboardState;
use crate::ui::screen::Screen;
use crate::ui::store::ViewStore;

/// What a leader fills in to schedule an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
}

/// Management screen for the club a leader runs.
///
/// Every action re-reads the club and checks that the caller is still its
/// leader before writing.
pub struct LeaderDashboardViewModel {
    store: ViewStore<LeaderDashboardReducer>,
    repos: Repositories,
    leader: UserId,
    club: ClubId,
}

impl LeaderDashboardViewModel {
    pub fn new(repos: Repositories, leader: UserId, club: ClubId) -> Self {
        Self {
            store: ViewStore::with_state(
                "leader_dashboard",
                LeaderDashboardState::new(leader.clone(), club.clone()),
            ),
            repos,
            leader,
            club,
        }
    }

    pub async fn approve_request(&self, request: &RequestId) -> Result<(), ActionError> {
        self.decide_request(request, RequestStatus::Approved).await
    }

    pub async fn reject_request(&self, request: &RequestId) -> Result<(), ActionError> {
        self.decide_request(request, RequestStatus::Rejected).await
    }

    pub async fn create_event(&self, draft: EventDraft) -> Result<Event, ActionError> {
        let _token = self.store.claim("create_event")?;
        let club = self.managed_club().await?;
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ActionError::invalid("Event title is required"));
        }

        let event = self
            .repos
            .events
            .create(Event {
                id: EventId::default(),
                club_id: club.id,
                title: title.to_string(),
                description: draft.description.trim().to_string(),
                location: draft.location.trim().to_string(),
                starts_at: draft.starts_at,
            })
            .await?;
        tracing::info!(club = %self.club, event = %event.id, "event created");
        Ok(event)
    }

    /// Registrations for the event are left in place.
    pub async fn delete_event(&self, event: &EventId) -> Result<(), ActionError> {
        let _token = self.store.claim(format!("delete_event:{event}"))?;
        let club = self.managed_club().await?;
        let Some(existing) = self.repos.events.get_by_id(event).await? else {
            return Err(ActionError::invalid("This event no longer exists"));
        };
        if existing.club_id != club.id {
            return Err(ActionError::not_permitted("This event belongs to another club"));
        }
        self.repos.events.delete(event).await?;
        tracing::info!(club = %self.club, %event, "event deleted");
        Ok(())
    }

    /// Post to the club and notify every member except the author.
    ///
    /// Notification delivery is best effort: the announcement stands even if
    /// some notifications could not be written.
    pub async fn post_announcement(&self, title: &str, body: &str) -> Result<Announcement, ActionError> {
        let _token = self.store.claim("post_announcement")?;
        let club = self.managed_club().await?;
        let title = title.trim();
        if title.is_empty() {
            return Err(ActionError::invalid("Announcement title is required"));
        }

        let announcement = self
            .repos
            .announcements
            .create(Announcement {
                id: AnnouncementId::default(),
                club_id: club.id.clone(),
                author_id: self.leader.clone(),
                title: title.to_string(),
                body: body.trim().to_string(),
                posted_at: Utc::now(),
            })
            .await?;

        let mut undelivered = 0usize;
        for member in club.members.iter().filter(|member| **member != self.leader) {
            let notification = Notification::to(
                member.clone(),
                format!("{}: {}", club.name, announcement.title),
                announcement.body.clone(),
            );
            if let Err(err) = self.repos.notifications.create(notification).await {
                undelivered += 1;
                tracing::warn!(club = %self.club, %member, error = %err, "announcement notification failed");
            }
        }
        tracing::info!(
            club = %self.club,
            announcement = %announcement.id,
            undelivered,
            "announcement posted"
        );
        Ok(announcement)
    }

    pub async fn remove_member(&self, member: &UserId) -> Result<(), ActionError> {
        let _token = self.store.claim(format!("remove_member:{member}"))?;
        let club = self.managed_club().await?;
        if *member == club.leader_id {
            return Err(ActionError::not_permitted("The leader cannot be removed from the club"));
        }
        if !club.members.contains(member) {
            return Err(ActionError::invalid("That user is not a member of this club"));
        }
        self.repos
            .clubs
            .update(&club.id, ClubPatch::RemoveMember(member.clone()))
            .await?;
        tracing::info!(club = %self.club, %member, "member removed");
        Ok(())
    }

    async fn decide_request(&self, id: &RequestId, decision: RequestStatus) -> Result<(), ActionError> {
        let _token = self.store.claim(format!("request:{id}"))?;
        let club = self.managed_club().await?;
        let Some(request) = self.repos.membership_requests.get_by_id(id).await? else {
            return Err(ActionError::invalid("This request no longer exists"));
        };
        if request.club_id != club.id {
            return Err(ActionError::not_permitted("This request is for another club"));
        }
        if request.status != RequestStatus::Pending {
            return Err(ActionError::invalid("This request has already been decided"));
        }

        // Member before status: AddMember is idempotent, and a failed add
        // must leave the request pending.
        let (title, body) = if decision == RequestStatus::Approved {
            self.repos
                .clubs
                .update(&club.id, ClubPatch::AddMember(request.user_id.clone()))
                .await?;
            (
                "Membership approved".to_string(),
                format!("You are now a member of {}", club.name),
            )
        } else {
            (
                "Membership request declined".to_string(),
                format!("Your request to join {} was declined", club.name),
            )
        };
        self.repos
            .membership_requests
            .update(id, MembershipRequestPatch::SetStatus(decision))
            .await?;
        let notification = Notification::to(request.user_id.clone(), title, body);
        if let Err(err) = self.repos.notifications.create(notification).await {
            tracing::warn!(club = %self.club, request = %id, error = %err, "decision notification failed");
        }
        tracing::info!(club = %self.club, request = %id, ?decision, "membership request decided");
        Ok(())
    }

    async fn managed_club(&self) -> Result<Club, ActionError> {
        let Some(club) = self.repos.clubs.get_by_id(&self.club).await? else {
            return Err(ActionError::invalid("This club no longer exists"));
        };
        if club.leader_id != self.leader {
            return Err(ActionError::not_permitted("Only the club's leader can do this"));
        }
        Ok(club)
    }
}

impl Screen for LeaderDashboardViewModel {
    type Reducer = LeaderDashboardReducer;

    fn store(&self) -> &ViewStore<LeaderDashboardReducer> {
        &self.store
    }

    fn activate(&self) {
        if !self.store.begin_activation() {
            return;
        }
        self.store.bind(
            self.repos
                .clubs
                .query_stream(ClubQuery::LedBy(self.leader.clone())),
            LeaderDashboardIntent::LedClubs,
        );
        self.store.bind(
            self.repos
                .membership_requests
                .query_stream(MembershipRequestQuery::PendingForClub(self.club.clone())),
            LeaderDashboardIntent::Requests,
        );
        self.store.bind(
            self.repos
                .events
                .query_stream(EventQuery::ForClub(self.club.clone())),
            LeaderDashboardIntent::Events,
        );
        self.store.bind(
            self.repos
                .announcements
                .query_stream(AnnouncementQuery::ForClub(self.club.clone())),
            LeaderDashboardIntent::Announcements,
        );
    }
}
