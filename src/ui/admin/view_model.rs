use chrono::Utc;

use crate::domain::{
    ApplicationId, ApplicationStatus, Club, ClubApplicationPatch, ClubApplicationQuery, ClubId,
    ClubStatus, Notification, Role, UserId, UserPatch, UserQuery,
};
use crate::repository::Repositories;
use crate::ui::action::ActionError;
use crate::ui::admin::intent::AdminIntent;
use crate::ui::admin::reducer::AdminReducer;
use crate::ui::screen::Screen;
use crate::ui::store::ViewStore;

/// Application review and user administration.
pub struct AdminViewModel {
    store: ViewStore<AdminReducer>,
    repos: Repositories,
    admin: UserId,
}

impl AdminViewModel {
    pub fn new(repos: Repositories, admin: UserId) -> Self {
        Self {
            store: ViewStore::new("admin"),
            repos,
            admin,
        }
    }

    /// Create the proposed club with the applicant as leader and only
    /// member, then promote the applicant and let them know.
    pub async fn approve_application(&self, id: &ApplicationId) -> Result<Club, ActionError> {
        let _token = self.store.claim(format!("application:{id}"))?;
        self.ensure_admin().await?;
        let Some(application) = self.repos.applications.get_by_id(id).await? else {
            return Err(ActionError::invalid("This application no longer exists"));
        };
        if application.status != ApplicationStatus::Pending {
            return Err(ActionError::invalid("This application has already been reviewed"));
        }

        // Status first: a second approval then fails the Pending check
        // instead of creating another club.
        self.repos
            .applications
            .update(id, ClubApplicationPatch::SetStatus(ApplicationStatus::Approved))
            .await?;
        let created = self
            .repos
            .clubs
            .create(Club {
                id: ClubId::default(),
                name: application.club_name.clone(),
                description: application.description.clone(),
                category: application.category.clone(),
                leader_id: application.applicant_id.clone(),
                members: vec![application.applicant_id.clone()],
                status: ClubStatus::Active,
                created_at: Utc::now(),
            })
            .await;
        let club = match created {
            Ok(club) => club,
            Err(err) => {
                let reopen = ClubApplicationPatch::SetStatus(ApplicationStatus::Pending);
                if let Err(rollback) = self.repos.applications.update(id, reopen).await {
                    tracing::warn!(application = %id, error = %rollback, "could not reopen application");
                }
                return Err(err.into());
            }
        };

        let applicant = self.repos.users.get_by_id(&application.applicant_id).await?;
        if applicant.is_some_and(|user| user.role == Role::Student) {
            self.repos
                .users
                .update(&application.applicant_id, UserPatch::SetRole(Role::ClubLeader))
                .await?;
        }
        let notification = Notification::to(
            application.applicant_id.clone(),
            "Club application approved",
            format!("{} is now open and you are its leader", club.name),
        );
        if let Err(err) = self.repos.notifications.create(notification).await {
            tracing::warn!(application = %id, error = %err, "approval notification failed");
        }
        tracing::info!(application = %id, club = %club.id, "club application approved");
        Ok(club)
    }

    pub async fn reject_application(&self, id: &ApplicationId, reason: &str) -> Result<(), ActionError> {
        let _token = self.store.claim(format!("application:{id}"))?;
        self.ensure_admin().await?;
        let Some(application) = self.repos.applications.get_by_id(id).await? else {
            return Err(ActionError::invalid("This application no longer exists"));
        };
        if application.status != ApplicationStatus::Pending {
            return Err(ActionError::invalid("This application has already been reviewed"));
        }

        self.repos
            .applications
            .update(id, ClubApplicationPatch::SetStatus(ApplicationStatus::Rejected))
            .await?;
        let reason = reason.trim();
        let body = if reason.is_empty() {
            format!("Your application for {} was not approved", application.club_name)
        } else {
            format!(
                "Your application for {} was not approved: {reason}",
                application.club_name
            )
        };
        self.repos
            .notifications
            .create(Notification::to(
                application.applicant_id,
                "Club application declined",
                body,
            ))
            .await?;
        tracing::info!(application = %id, "club application rejected");
        Ok(())
    }

    pub async fn set_user_role(&self, user: &UserId, role: Role) -> Result<(), ActionError> {
        let _token = self.store.claim(format!("user:{user}"))?;
        self.ensure_admin().await?;
        if *user == self.admin {
            return Err(ActionError::not_permitted("You cannot change your own role"));
        }
        self.repos.users.update(user, UserPatch::SetRole(role)).await?;
        tracing::info!(%user, ?role, "user role changed");
        Ok(())
    }

    pub async fn set_user_active(&self, user: &UserId, active: bool) -> Result<(), ActionError> {
        let _token = self.store.claim(format!("user:{user}"))?;
        self.ensure_admin().await?;
        if *user == self.admin {
            return Err(ActionError::not_permitted("You cannot deactivate your own account"));
        }
        self.repos.users.update(user, UserPatch::SetActive(active)).await?;
        tracing::info!(%user, active, "user activation changed");
        Ok(())
    }

    async fn ensure_admin(&self) -> Result<(), ActionError> {
        match self.repos.users.get_by_id(&self.admin).await? {
            Some(user) if user.is_admin() && user.active => Ok(()),
            _ => Err(ActionError::not_permitted("Administrator access is required")),
        }
    }
}

impl Screen for AdminViewModel {
    type Reducer = AdminReducer;

    fn store(&self) -> &ViewStore<AdminReducer> {
        &self.store
    }

    fn activate(&self) {
        if !self.store.begin_activation() {
            return;
        }
        self.store.bind(
            self.repos
                .applications
                .query_stream(ClubApplicationQuery::Pending),
            AdminIntent::Applications,
        );
        self.store
            .bind(self.repos.users.query_stream(UserQuery::All), AdminIntent::Users);
    }
}
