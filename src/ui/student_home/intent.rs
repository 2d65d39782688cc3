use crate::async_result::AsyncResult;
use crate::domain::{Club, ClubApplication, Event, EventRegistration};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StudentHomeIntent {
    Clubs(AsyncResult<Vec<Club>>),
    Events(AsyncResult<Vec<Event>>),
    Registrations(AsyncResult<Vec<EventRegistration>>),
    Applications(AsyncResult<Vec<ClubApplication>>),
}

impl Intent for StudentHomeIntent {}
