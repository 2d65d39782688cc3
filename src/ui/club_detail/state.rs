use crate::domain::{Announcement, Club, ClubId, Event, MembershipRequest, RequestStatus, UserId};
use crate::ui::mvi::UiState;
use crate::ui::status::LoadStatus;

/// The viewer's relationship to the club on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipStatus {
    Leader,
    Member,
    /// A join request is awaiting the leader's decision.
    Requested,
    NotMember,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubDetailState {
    pub status: LoadStatus,
    pub viewer: UserId,
    pub club_id: ClubId,
    pub club: Option<Club>,
    /// The last read found no club with `club_id`.
    pub not_found: bool,
    pub events: Vec<Event>,
    /// The viewer's join requests for this club.
    pub requests: Vec<MembershipRequest>,
    pub announcements: Vec<Announcement>,
}

impl ClubDetailState {
    pub fn new(viewer: UserId, club_id: ClubId) -> Self {
        Self {
            viewer,
            club_id,
            ..Self::default()
        }
    }

    pub fn membership_status(&self) -> MembershipStatus {
        match &self.club {
            Some(club) if club.leader_id == self.viewer => MembershipStatus::Leader,
            Some(club) if club.is_member(&self.viewer) => MembershipStatus::Member,
            _ if self.has_pending_request() => MembershipStatus::Requested,
            _ => MembershipStatus::NotMember,
        }
    }

    pub fn has_pending_request(&self) -> bool {
        self.requests
            .iter()
            .any(|request| request.status == RequestStatus::Pending)
    }
}

impl UiState for ClubDetailState {
    fn status(&self) -> &LoadStatus {
        &self.status
    }
}
