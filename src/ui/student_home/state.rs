use crate::domain::{Club, ClubApplication, Event, EventId, EventRegistration};
use crate::ui::mvi::UiState;
use crate::ui::status::LoadStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentHomeState {
    pub status: LoadStatus,
    /// Active clubs the student belongs to.
    pub clubs: Vec<Club>,
    /// Events starting inside the upcoming window, soonest first.
    pub events: Vec<Event>,
    pub registrations: Vec<EventRegistration>,
    pub applications: Vec<ClubApplication>,
}

impl StudentHomeState {
    pub fn registration_for(&self, event: &EventId) -> Option<&EventRegistration> {
        self.registrations
            .iter()
            .find(|registration| registration.event_id == *event)
    }

    pub fn is_registered(&self, event: &EventId) -> bool {
        self.registration_for(event).is_some()
    }

    /// Upcoming events of clubs the student is a member of.
    pub fn member_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| self.clubs.iter().any(|club| club.id == event.club_id))
            .collect()
    }
}

impl UiState for StudentHomeState {
    fn status(&self) -> &LoadStatus {
        &self.status
    }
}
