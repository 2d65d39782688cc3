use chrono::Utc;

use crate::domain::{
    AnnouncementQuery, ClubId, ClubPatch, EventQuery, MembershipRequest, MembershipRequestQuery,
    RequestId, RequestStatus, UserId,
};
use crate::repository::Repositories;
use crate::ui::action::ActionError;
use crate::ui::club_detail::intent::ClubDetailIntent;
use crate::ui::club_detail::reducer::ClubDetailReducer;
use crate::ui::club_detail::state::{ClubDetailState, MembershipStatus};
use crate::ui::screen::Screen;
use crate::ui::store::ViewStore;

/// One club as seen by a (possibly non-member) viewer.
///
/// The club record itself is a one-shot read, so membership changes made
/// here are followed by a fresh read.
pub struct ClubDetailViewModel {
    store: ViewStore<ClubDetailReducer>,
    repos: Repositories,
    viewer: UserId,
    club: ClubId,
}

impl ClubDetailViewModel {
    pub fn new(repos: Repositories, viewer: UserId, club: ClubId) -> Self {
        Self {
            store: ViewStore::with_state(
                "club_detail",
                ClubDetailState::new(viewer.clone(), club.clone()),
            ),
            repos,
            viewer,
            club,
        }
    }

    /// Re-read the club record.
    pub fn refresh(&self) {
        let clubs = self.repos.clubs.clone();
        let id = self.club.clone();
        self.store
            .load(async move { clubs.get_by_id(&id).await }, ClubDetailIntent::Club);
    }

    /// Ask the leader to be let in.
    pub async fn request_membership(&self) -> Result<MembershipRequest, ActionError> {
        let _token = self.store.claim("request_membership")?;
        let state = self.store.snapshot();
        match state.membership_status() {
            MembershipStatus::Leader | MembershipStatus::Member => {
                return Err(ActionError::invalid("You are already a member of this club"));
            }
            MembershipStatus::Requested => {
                return Err(ActionError::invalid("Your request is already awaiting review"));
            }
            MembershipStatus::NotMember => {}
        }
        if state.club.is_none() {
            return Err(ActionError::invalid("This club is not available"));
        }

        let request = self
            .repos
            .membership_requests
            .create(MembershipRequest {
                id: RequestId::default(),
                club_id: self.club.clone(),
                user_id: self.viewer.clone(),
                status: RequestStatus::Pending,
                created_at: Utc::now(),
            })
            .await?;
        tracing::info!(user = %self.viewer, club = %self.club, "membership requested");
        Ok(request)
    }

    pub async fn leave_club(&self) -> Result<(), ActionError> {
        let _token = self.store.claim("leave_club")?;
        match self.store.snapshot().membership_status() {
            MembershipStatus::Leader => {
                return Err(ActionError::not_permitted(
                    "Leaders cannot leave their own club",
                ));
            }
            MembershipStatus::Member => {}
            MembershipStatus::Requested | MembershipStatus::NotMember => {
                return Err(ActionError::invalid("You are not a member of this club"));
            }
        }

        self.repos
            .clubs
            .update(&self.club, ClubPatch::RemoveMember(self.viewer.clone()))
            .await?;
        tracing::info!(user = %self.viewer, club = %self.club, "left club");
        self.refresh();
        Ok(())
    }
}

impl Screen for ClubDetailViewModel {
    type Reducer = ClubDetailReducer;

    fn store(&self) -> &ViewStore<ClubDetailReducer> {
        &self.store
    }

    fn activate(&self) {
        if !self.store.begin_activation() {
            return;
        }
        self.refresh();
        self.store.bind(
            self.repos
                .events
                .query_stream(EventQuery::ForClub(self.club.clone())),
            ClubDetailIntent::Events,
        );
        self.store.bind(
            self.repos
                .membership_requests
                .query_stream(MembershipRequestQuery::ForUserAndClub(
                    self.viewer.clone(),
                    self.club.clone(),
                )),
            ClubDetailIntent::Requests,
        );
        self.store.bind(
            self.repos
                .announcements
                .query_stream(AnnouncementQuery::ForClub(self.club.clone())),
            ClubDetailIntent::Announcements,
        );
    }
}
