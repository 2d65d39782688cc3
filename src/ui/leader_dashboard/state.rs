use crate::domain::{Announcement, Club, ClubId, Event, MembershipRequest, UserId};
use crate::ui::mvi::UiState;
use crate::ui::status::LoadStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderDashboardState {
    pub status: LoadStatus,
    pub leader: UserId,
    pub club_id: ClubId,
    /// `None` until loaded, or when `leader` does not lead `club_id`.
    pub club: Option<Club>,
    pub pending_requests: Vec<MembershipRequest>,
    pub events: Vec<Event>,
    pub announcements: Vec<Announcement>,
}

impl LeaderDashboardState {
    pub fn new(leader: UserId, club_id: ClubId) -> Self {
        Self {
            leader,
            club_id,
            ..Self::default()
        }
    }

    pub fn members(&self) -> &[UserId] {
        self.club
            .as_ref()
            .map(|club| club.members.as_slice())
            .unwrap_or_default()
    }
}

impl UiState for LeaderDashboardState {
    fn status(&self) -> &LoadStatus {
        &self.status
    }
}
