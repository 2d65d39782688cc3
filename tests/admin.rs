//! Admin screen: application review and user administration.

mod common;

use std::sync::Arc;

use clubhub::domain::{
    ApplicationId, ApplicationStatus, ClubApplication, Role, User, UserId,
};
use clubhub::repository::{Repository, Seed};
use clubhub::ui::admin::AdminViewModel;
use clubhub::ui::mvi::UiState;
use clubhub::ui::{ActionError, Screen};
use common::{at, campus, eventually, settled, FlakyWrites, World};

fn application(id: &str, applicant: &str, name: &str, category: &str) -> ClubApplication {
    ClubApplication {
        id: ApplicationId::new(id),
        applicant_id: UserId::new(applicant),
        club_name: name.to_string(),
        description: format!("All about {name}"),
        category: category.to_string(),
        status: ApplicationStatus::Pending,
        submitted_at: at(6, 15),
    }
}

fn with_applications() -> Seed {
    Seed {
        applications: vec![
            application("app-go", "amy", "Go Club", "Games"),
            application("app-film", "lee", "Film Society", "Arts"),
        ],
        ..campus()
    }
}

fn stored_user(world: &World, uid: &str) -> User {
    world
        .store
        .users
        .records()
        .into_iter()
        .find(|u| u.uid.as_str() == uid)
        .unwrap()
}

#[tokio::test]
async fn lists_pending_applications_and_users() {
    let world = World::open(&with_applications());
    let vm = AdminViewModel::new(world.repos.clone(), UserId::new("ada"));
    vm.activate();

    let state = settled(vm.store()).await;
    assert_eq!(state.applications.len(), 2);
    assert_eq!(state.users.len(), 4);
    assert_eq!(state.users_with_role(Role::Student).count(), 2);
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn approval_opens_the_club_and_promotes_the_applicant() {
    let world = World::open(&with_applications());
    let vm = AdminViewModel::new(world.repos.clone(), UserId::new("ada"));
    vm.activate();
    settled(vm.store()).await;

    let club = vm
        .approve_application(&ApplicationId::new("app-go"))
        .await
        .unwrap();
    assert_eq!(club.name, "Go Club");
    assert_eq!(club.leader_id, UserId::new("amy"));
    assert_eq!(club.members, vec![UserId::new("amy")]);
    assert_eq!(
        world.store.clubs.get_by_id(&club.id).await.unwrap(),
        Some(club.clone())
    );

    let state = eventually(vm.store(), |s| s.applications.len() == 1).await;
    assert_eq!(state.applications[0].id, ApplicationId::new("app-film"));
    assert_eq!(stored_user(&world, "amy").role, Role::ClubLeader);

    let notes = world.store.notifications.records();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].user_id, UserId::new("amy"));
    assert_eq!(notes[0].body, "Go Club is now open and you are its leader");
}

#[tokio::test]
async fn approval_keeps_a_higher_role() {
    let world = World::open(&with_applications());
    let vm = AdminViewModel::new(world.repos.clone(), UserId::new("ada"));

    vm.approve_application(&ApplicationId::new("app-film"))
        .await
        .unwrap();
    assert_eq!(stored_user(&world, "lee").role, Role::ClubLeader);

    let again = vm.approve_application(&ApplicationId::new("app-film")).await;
    assert_eq!(
        again.map(|_| ()),
        Err(ActionError::invalid("This application has already been reviewed"))
    );
}

#[tokio::test]
async fn rejection_notifies_with_the_reason() {
    let world = World::open(&with_applications());
    let vm = AdminViewModel::new(world.repos.clone(), UserId::new("ada"));

    vm.reject_application(&ApplicationId::new("app-go"), "  Duplicate of Chess Club ")
        .await
        .unwrap();
    vm.reject_application(&ApplicationId::new("app-film"), "")
        .await
        .unwrap();

    let bodies: Vec<(String, String)> = world
        .store
        .notifications
        .records()
        .into_iter()
        .map(|n| (n.user_id.to_string(), n.body))
        .collect();
    assert!(bodies.contains(&(
        "amy".to_string(),
        "Your application for Go Club was not approved: Duplicate of Chess Club".to_string()
    )));
    assert!(bodies.contains(&(
        "lee".to_string(),
        "Your application for Film Society was not approved".to_string()
    )));
    assert_eq!(stored_user(&world, "amy").role, Role::Student);
    assert_eq!(world.store.clubs.records().len(), 2);
}

#[tokio::test]
async fn non_admins_are_refused() {
    let world = World::open(&with_applications());
    let vm = AdminViewModel::new(world.repos.clone(), UserId::new("lee"));

    let expected = Err(ActionError::not_permitted("Administrator access is required"));
    assert_eq!(
        vm.approve_application(&ApplicationId::new("app-go"))
            .await
            .map(|_| ()),
        expected
    );
    assert_eq!(
        vm.set_user_role(&UserId::new("amy"), Role::Admin).await,
        expected
    );
    assert!(world.store.notifications.records().is_empty());
}

#[tokio::test]
async fn admin_cannot_demote_or_deactivate_themselves() {
    let world = World::open(&campus());
    let vm = AdminViewModel::new(world.repos.clone(), UserId::new("ada"));

    assert_eq!(
        vm.set_user_role(&UserId::new("ada"), Role::Student).await,
        Err(ActionError::not_permitted("You cannot change your own role"))
    );
    assert_eq!(
        vm.set_user_active(&UserId::new("ada"), false).await,
        Err(ActionError::not_permitted("You cannot deactivate your own account"))
    );
    assert_eq!(stored_user(&world, "ada").role, Role::Admin);
}

#[tokio::test]
async fn role_and_activation_changes_show_up_live() {
    let world = World::open(&campus());
    let vm = AdminViewModel::new(world.repos.clone(), UserId::new("ada"));
    vm.activate();
    settled(vm.store()).await;

    vm.set_user_role(&UserId::new("bob"), Role::ClubLeader)
        .await
        .unwrap();
    vm.set_user_active(&UserId::new("amy"), false).await.unwrap();

    let state = eventually(vm.store(), |s| {
        s.users_with_role(Role::ClubLeader).count() == 2
            && s.users.iter().any(|u| u.uid.as_str() == "amy" && !u.active)
    })
    .await;
    assert_eq!(state.users_with_role(Role::Student).count(), 1);
}

#[tokio::test]
async fn deactivated_admin_loses_access() {
    let world = World::open(&campus());
    let admin = AdminViewModel::new(world.repos.clone(), UserId::new("ada"));
    admin
        .set_user_role(&UserId::new("lee"), Role::Admin)
        .await
        .unwrap();
    let lee = AdminViewModel::new(world.repos.clone(), UserId::new("lee"));
    lee.set_user_active(&UserId::new("ada"), false).await.unwrap();

    assert_eq!(
        admin.set_user_active(&UserId::new("lee"), false).await,
        Err(ActionError::not_permitted("Administrator access is required"))
    );
    assert!(!stored_user(&world, "ada").active);
    assert_eq!(world.store.clubs.records().len(), 2);
}

fn stored_application(world: &World, id: &str) -> ClubApplication {
    world
        .store
        .applications
        .records()
        .into_iter()
        .find(|a| a.id.as_str() == id)
        .unwrap()
}

fn clubs_named(world: &World, name: &str) -> usize {
    world
        .store
        .clubs
        .records()
        .iter()
        .filter(|c| c.name == name)
        .count()
}

#[tokio::test]
async fn failed_status_write_creates_no_club() {
    let world = World::open(&with_applications());
    let applications = Arc::new(FlakyWrites::new(world.repos.applications.clone()));
    applications.fail_updates(Some("network down"));
    let mut repos = world.repos.clone();
    repos.applications = applications.clone();
    let vm = AdminViewModel::new(repos, UserId::new("ada"));

    let result = vm.approve_application(&ApplicationId::new("app-go")).await;
    assert!(matches!(result, Err(ActionError::Repository(_))));
    assert_eq!(clubs_named(&world, "Go Club"), 0);
    assert_eq!(stored_application(&world, "app-go").status, ApplicationStatus::Pending);

    applications.fail_updates(None);
    vm.approve_application(&ApplicationId::new("app-go")).await.unwrap();
    assert_eq!(clubs_named(&world, "Go Club"), 1);
    assert_eq!(stored_application(&world, "app-go").status, ApplicationStatus::Approved);
}

#[tokio::test]
async fn failed_club_create_reopens_the_application() {
    let world = World::open(&with_applications());
    let clubs = Arc::new(FlakyWrites::new(world.repos.clubs.clone()));
    clubs.fail_creates(Some("quota exceeded"));
    let mut repos = world.repos.clone();
    repos.clubs = clubs.clone();
    let vm = AdminViewModel::new(repos, UserId::new("ada"));

    let result = vm.approve_application(&ApplicationId::new("app-go")).await;
    assert!(matches!(result, Err(ActionError::Repository(_))));
    assert_eq!(stored_application(&world, "app-go").status, ApplicationStatus::Pending);
    assert_eq!(stored_user(&world, "amy").role, Role::Student);

    clubs.fail_creates(None);
    let club = vm.approve_application(&ApplicationId::new("app-go")).await.unwrap();
    assert_eq!(clubs_named(&world, "Go Club"), 1);
    assert_eq!(club.leader_id, UserId::new("amy"));
}
