use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    AnnouncementId, ApplicationId, ClubId, Entity, EntityPatch, EntityQuery, RequestId, UserId,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubStatus {
    #[default]
    Active,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub leader_id: UserId,
    #[serde(default)]
    pub members: Vec<UserId>,
    #[serde(default)]
    pub status: ClubStatus,
    pub created_at: DateTime<Utc>,
}

impl Club {
    pub fn is_member(&self, user: &UserId) -> bool {
        self.leader_id == *user || self.members.contains(user)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubQuery {
    All,
    /// Clubs open for browsing.
    Active,
    MemberOf(UserId),
    LedBy(UserId),
}

impl EntityQuery<Club> for ClubQuery {
    fn matches(&self, club: &Club) -> bool {
        match self {
            Self::All => true,
            Self::Active => club.status == ClubStatus::Active,
            Self::MemberOf(user) => club.status == ClubStatus::Active && club.is_member(user),
            Self::LedBy(user) => club.leader_id == *user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubPatch {
    AddMember(UserId),
    RemoveMember(UserId),
    SetLeader(UserId),
    SetStatus(ClubStatus),
}

impl EntityPatch<Club> for ClubPatch {
    fn apply(self, club: &mut Club) {
        match self {
            Self::AddMember(user) => {
                if !club.members.contains(&user) {
                    club.members.push(user);
                }
            }
            Self::RemoveMember(user) => club.members.retain(|member| *member != user),
            Self::SetLeader(user) => {
                if !club.members.contains(&user) {
                    club.members.push(user.clone());
                }
                club.leader_id = user;
            }
            Self::SetStatus(status) => club.status = status,
        }
    }
}

impl Entity for Club {
    type Id = ClubId;
    type Query = ClubQuery;
    type Patch = ClubPatch;

    const COLLECTION: &'static str = "clubs";

    fn id(&self) -> &ClubId {
        &self.id
    }

    fn set_id(&mut self, id: ClubId) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A student's request to join a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipRequest {
    pub id: RequestId,
    pub club_id: ClubId,
    pub user_id: UserId,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipRequestQuery {
    PendingForClub(ClubId),
    ForUserAndClub(UserId, ClubId),
    ForUser(UserId),
}

impl EntityQuery<MembershipRequest> for MembershipRequestQuery {
    fn matches(&self, request: &MembershipRequest) -> bool {
        match self {
            Self::PendingForClub(club) => {
                request.club_id == *club && request.status == RequestStatus::Pending
            }
            Self::ForUserAndClub(user, club) => {
                request.user_id == *user && request.club_id == *club
            }
            Self::ForUser(user) => request.user_id == *user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipRequestPatch {
    SetStatus(RequestStatus),
}

impl EntityPatch<MembershipRequest> for MembershipRequestPatch {
    fn apply(self, request: &mut MembershipRequest) {
        match self {
            Self::SetStatus(status) => request.status = status,
        }
    }
}

impl Entity for MembershipRequest {
    type Id = RequestId;
    type Query = MembershipRequestQuery;
    type Patch = MembershipRequestPatch;

    const COLLECTION: &'static str = "membershipRequests";

    fn id(&self) -> &RequestId {
        &self.id
    }

    fn set_id(&mut self, id: RequestId) {
        self.id = id;
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.created_at.cmp(&other.created_at)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A student's application to found a new club, reviewed by an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubApplication {
    pub id: ApplicationId,
    pub applicant_id: UserId,
    pub club_name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubApplicationQuery {
    Pending,
    ByApplicant(UserId),
}

impl EntityQuery<ClubApplication> for ClubApplicationQuery {
    fn matches(&self, application: &ClubApplication) -> bool {
        match self {
            Self::Pending => application.status == ApplicationStatus::Pending,
            Self::ByApplicant(user) => application.applicant_id == *user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubApplicationPatch {
    SetStatus(ApplicationStatus),
}

impl EntityPatch<ClubApplication> for ClubApplicationPatch {
    fn apply(self, application: &mut ClubApplication) {
        match self {
            Self::SetStatus(status) => application.status = status,
        }
    }
}

impl Entity for ClubApplication {
    type Id = ApplicationId;
    type Query = ClubApplicationQuery;
    type Patch = ClubApplicationPatch;

    const COLLECTION: &'static str = "clubApplications";

    fn id(&self) -> &ApplicationId {
        &self.id
    }

    fn set_id(&mut self, id: ApplicationId) {
        self.id = id;
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.submitted_at.cmp(&other.submitted_at)
    }
}

/// A message posted by a club leader to the club's members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub club_id: ClubId,
    pub author_id: UserId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnouncementQuery {
    ForClub(ClubId),
    ForClubs(Vec<ClubId>),
}

impl EntityQuery<Announcement> for AnnouncementQuery {
    fn matches(&self, announcement: &Announcement) -> bool {
        match self {
            Self::ForClub(club) => announcement.club_id == *club,
            Self::ForClubs(clubs) => clubs.contains(&announcement.club_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnouncementPatch {
    Edit { title: String, body: String },
}

impl EntityPatch<Announcement> for AnnouncementPatch {
    fn apply(self, announcement: &mut Announcement) {
        match self {
            Self::Edit { title, body } => {
                announcement.title = title;
                announcement.body = body;
            }
        }
    }
}

impl Entity for Announcement {
    type Id = AnnouncementId;
    type Query = AnnouncementQuery;
    type Patch = AnnouncementPatch;

    const COLLECTION: &'static str = "announcements";

    fn id(&self) -> &AnnouncementId {
        &self.id
    }

    fn set_id(&mut self, id: AnnouncementId) {
        self.id = id;
    }

    // Newest first.
    fn display_order(&self, other: &Self) -> Ordering {
        other.posted_at.cmp(&self.posted_at)
    }
}
