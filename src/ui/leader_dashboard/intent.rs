use crate::async_result::AsyncResult;
use crate::domain::{Announcement, Club, Event, MembershipRequest};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LeaderDashboardIntent {
    /// Every club the leader leads; the reducer picks the one on screen.
    LedClubs(AsyncResult<Vec<Club>>),
    Requests(AsyncResult<Vec<MembershipRequest>>),
    Events(AsyncResult<Vec<Event>>),
    Announcements(AsyncResult<Vec<Announcement>>),
}

impl Intent for LeaderDashboardIntent {}
