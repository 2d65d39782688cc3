use chrono::Utc;

use crate::domain::{
    ApplicationId, ApplicationStatus, ClubApplication, ClubApplicationQuery, ClubQuery, EventId,
    EventQuery, EventRegistration, EventRegistrationQuery, EventWindow, RegistrationId, UserId,
};
use crate::repository::Repositories;
use crate::ui::action::ActionError;
use crate::ui::screen::Screen;
use crate::ui::store::ViewStore;
use crate::ui::student_home::intent::StudentHomeIntent;
use crate::ui::student_home::reducer::StudentHomeReducer;

/// What a student fills in to propose a new club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub club_name: String,
    pub description: String,
    pub category: String,
}

/// A student's landing screen.
pub struct StudentHomeViewModel {
    store: ViewStore<StudentHomeReducer>,
    repos: Repositories,
    student: UserId,
    window_days: u32,
}

impl StudentHomeViewModel {
    pub fn new(repos: Repositories, student: UserId, window_days: u32) -> Self {
        Self {
            store: ViewStore::new("student_home"),
            repos,
            student,
            window_days,
        }
    }

    /// Register for `event`, or cancel the registration if one exists.
    /// Returns whether the student is registered afterwards.
    pub async fn toggle_event_registration(&self, event: &EventId) -> Result<bool, ActionError> {
        let _token = self.store.claim(format!("registration:{event}"))?;

        let existing = self
            .store
            .snapshot()
            .registration_for(event)
            .map(|registration| registration.id.clone());
        match existing {
            Some(id) => {
                self.repos.registrations.delete(&id).await?;
                tracing::info!(user = %self.student, %event, "event registration cancelled");
                Ok(false)
            }
            None => {
                if self.repos.events.get_by_id(event).await?.is_none() {
                    return Err(ActionError::invalid("This event no longer exists"));
                }
                self.repos
                    .registrations
                    .create(EventRegistration {
                        id: RegistrationId::default(),
                        event_id: event.clone(),
                        user_id: self.student.clone(),
                        registered_at: Utc::now(),
                    })
                    .await?;
                tracing::info!(user = %self.student, %event, "registered for event");
                Ok(true)
            }
        }
    }

    /// Propose a new club for admin review.
    pub async fn submit_club_application(
        &self,
        draft: ApplicationDraft,
    ) -> Result<ClubApplication, ActionError> {
        let _token = self.store.claim("submit_application")?;

        let club_name = draft.club_name.trim();
        let category = draft.category.trim();
        if club_name.is_empty() {
            return Err(ActionError::invalid("Club name is required"));
        }
        if category.is_empty() {
            return Err(ActionError::invalid("Category is required"));
        }
        let duplicate = self.store.snapshot().applications.iter().any(|application| {
            application.status == ApplicationStatus::Pending
                && application.club_name.eq_ignore_ascii_case(club_name)
        });
        if duplicate {
            return Err(ActionError::invalid(format!(
                "You already have a pending application for '{club_name}'"
            )));
        }

        let application = self
            .repos
            .applications
            .create(ClubApplication {
                id: ApplicationId::default(),
                applicant_id: self.student.clone(),
                club_name: club_name.to_string(),
                description: draft.description.trim().to_string(),
                category: category.to_string(),
                status: ApplicationStatus::Pending,
                submitted_at: Utc::now(),
            })
            .await?;
        tracing::info!(user = %self.student, application = %application.id, "club application submitted");
        Ok(application)
    }
}

impl Screen for StudentHomeViewModel {
    type Reducer = StudentHomeReducer;

    fn store(&self) -> &ViewStore<StudentHomeReducer> {
        &self.store
    }

    fn activate(&self) {
        if !self.store.begin_activation() {
            return;
        }
        let window = EventWindow::starting_at(Utc::now(), self.window_days);
        self.store.bind(
            self.repos
                .clubs
                .query_stream(ClubQuery::MemberOf(self.student.clone())),
            StudentHomeIntent::Clubs,
        );
        self.store.bind(
            self.repos.events.query_stream(EventQuery::Upcoming(window)),
            StudentHomeIntent::Events,
        );
        self.store.bind(
            self.repos
                .registrations
                .query_stream(EventRegistrationQuery::ForUser(self.student.clone())),
            StudentHomeIntent::Registrations,
        );
        self.store.bind(
            self.repos
                .applications
                .query_stream(ClubApplicationQuery::ByApplicant(self.student.clone())),
            StudentHomeIntent::Applications,
        );
    }
}
