mod common;

use std::sync::Arc;

use clubhub::domain::{Club, ClubId, RequestStatus, UserId};
use clubhub::repository::RepositoryError;
use clubhub::ui::club_detail::{ClubDetailViewModel, MembershipStatus};
use clubhub::ui::mvi::UiState;
use clubhub::ui::{ActionError, Screen};

use common::{campus, club, eventually, settled, ScriptedRepository, World};

fn detail(world: &World, viewer: &str, club: &str) -> ClubDetailViewModel {
    let vm = ClubDetailViewModel::new(world.repos.clone(), UserId::new(viewer), ClubId::new(club));
    vm.activate();
    vm
}

#[tokio::test]
async fn missing_club_is_not_found_rather_than_an_error() {
    let world = World::open(&campus());
    let vm = detail(&world, "amy", "gone");

    let state = settled(vm.store()).await;
    assert!(state.not_found);
    assert_eq!(state.club, None);
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn member_sees_club_and_its_events() {
    let world = World::open(&campus());
    let vm = detail(&world, "amy", "chess");

    let state = settled(vm.store()).await;
    assert_eq!(state.club.as_ref().map(|c| c.name.as_str()), Some("Chess Club"));
    assert_eq!(state.membership_status(), MembershipStatus::Member);
    let events: Vec<_> = state.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(events, vec!["blitz", "far"]);
}

#[tokio::test]
async fn requesting_membership_creates_one_pending_request() {
    let world = World::open(&campus());
    let vm = detail(&world, "bob", "soccer");
    let state = settled(vm.store()).await;
    assert_eq!(state.membership_status(), MembershipStatus::NotMember);

    let request = vm.request_membership().await.unwrap();
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.user_id, UserId::new("bob"));

    let state = eventually(vm.store(), |s| s.has_pending_request()).await;
    assert_eq!(state.membership_status(), MembershipStatus::Requested);

    let again = vm.request_membership().await;
    assert!(matches!(again, Err(ActionError::Invalid { .. })));
    assert_eq!(world.store.membership_requests.records().len(), 1);
}

#[tokio::test]
async fn members_cannot_request_again() {
    let world = World::open(&campus());
    let vm = detail(&world, "amy", "chess");
    settled(vm.store()).await;

    let result = vm.request_membership().await;
    assert!(matches!(result, Err(ActionError::Invalid { .. })));
}

#[tokio::test]
async fn leaving_re_reads_the_club() {
    let world = World::open(&campus());
    let vm = detail(&world, "amy", "chess");
    settled(vm.store()).await;

    vm.leave_club().await.unwrap();
    let state = eventually(vm.store(), |s| {
        s.membership_status() == MembershipStatus::NotMember && !s.is_loading()
    })
    .await;
    assert_eq!(state.club.unwrap().members, vec![UserId::new("lee")]);
}

#[tokio::test]
async fn leader_cannot_leave_their_club() {
    let world = World::open(&campus());
    let vm = detail(&world, "lee", "chess");
    let state = settled(vm.store()).await;
    assert_eq!(state.membership_status(), MembershipStatus::Leader);

    let result = vm.leave_club().await;
    assert!(matches!(result, Err(ActionError::NotPermitted { .. })));
}

#[tokio::test]
async fn writes_without_a_session_are_rejected() {
    let world = World::gated(&campus());
    let vm = detail(&world, "bob", "soccer");
    settled(vm.store()).await;

    let result = vm.request_membership().await;
    assert_eq!(
        result,
        Err(ActionError::Repository(RepositoryError::NotAuthenticated))
    );

    world.sign_in_as("bob", "student-pass").await;
    assert!(vm.request_membership().await.is_ok());
}

#[tokio::test]
async fn failed_re_read_keeps_the_club_and_reports_the_error() {
    let world = World::open(&campus());
    let clubs = Arc::new(ScriptedRepository::<Club>::new());
    clubs.script_read(Ok(Some(club("chess", "Chess Club", "Academic", "lee", &["lee"]))));
    clubs.script_read(Err(RepositoryError::remote("deadline exceeded")));
    clubs.script_read(Ok(Some(club("chess", "Chess Club", "Academic", "lee", &["lee", "amy"]))));
    let mut repos = world.repos.clone();
    repos.clubs = clubs.clone();

    let vm = ClubDetailViewModel::new(repos, UserId::new("amy"), ClubId::new("chess"));
    vm.activate();
    let state = settled(vm.store()).await;
    assert_eq!(state.membership_status(), MembershipStatus::NotMember);

    vm.refresh();
    let state = eventually(vm.store(), |s| s.error().is_some()).await;
    assert_eq!(state.error(), Some("deadline exceeded"));
    assert!(state.club.is_some());
    assert_eq!(state.events.len(), 2);

    vm.refresh();
    let state = eventually(vm.store(), |s| s.membership_status() == MembershipStatus::Member).await;
    assert_eq!(state.error(), None);
    assert_eq!(clubs.read_calls(), 3);
}
