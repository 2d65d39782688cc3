use crate::async_result::AsyncResult;
use crate::domain::{Announcement, Club, Event, MembershipRequest};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ClubDetailIntent {
    /// One-shot read of the club; `Success(None)` when it does not exist.
    Club(AsyncResult<Option<Club>>),
    Events(AsyncResult<Vec<Event>>),
    Requests(AsyncResult<Vec<MembershipRequest>>),
    Announcements(AsyncResult<Vec<Announcement>>),
}

impl Intent for ClubDetailIntent {}
