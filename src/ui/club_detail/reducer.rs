use crate::async_result::AsyncResult;
use crate::ui::club_detail::intent::ClubDetailIntent;
use crate::ui::club_detail::state::ClubDetailState;
use crate::ui::mvi::Reducer;
use crate::ui::status::merge_field;

pub struct ClubDetailReducer;

impl Reducer for ClubDetailReducer {
    type State = ClubDetailState;
    type Intent = ClubDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ClubDetailIntent::Club(result) => {
                let not_found = match &result {
                    AsyncResult::Success(club) => club.is_none(),
                    _ => state.not_found,
                };
                let (status, club) = merge_field(state.status, state.club, result);
                ClubDetailState {
                    status,
                    club,
                    not_found,
                    ..state
                }
            }
            ClubDetailIntent::Events(result) => {
                let (status, events) = merge_field(state.status, state.events, result);
                ClubDetailState {
                    status,
                    events,
                    ..state
                }
            }
            ClubDetailIntent::Requests(result) => {
                let (status, requests) = merge_field(state.status, state.requests, result);
                ClubDetailState {
                    status,
                    requests,
                    ..state
                }
            }
            ClubDetailIntent::Announcements(result) => {
                let (status, announcements) = merge_field(state.status, state.announcements, result);
                ClubDetailState {
                    status,
                    announcements,
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Club, ClubId, ClubStatus, MembershipRequest, RequestId, RequestStatus, UserId,
    };
    use crate::ui::club_detail::state::MembershipStatus;
    use chrono::Utc;

    fn state() -> ClubDetailState {
        ClubDetailState::new(UserId::new("amy"), ClubId::new("chess"))
    }

    fn club(members: Vec<&str>) -> Club {
        Club {
            id: ClubId::new("chess"),
            name: "Chess Club".to_string(),
            description: String::new(),
            category: "Academic".to_string(),
            leader_id: UserId::new("lead"),
            members: members.into_iter().map(UserId::new).collect(),
            status: ClubStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn absent_club_sets_not_found() {
        let state = ClubDetailReducer::reduce(state(), ClubDetailIntent::Club(AsyncResult::Pending));
        assert!(!state.not_found);
        let state = ClubDetailReducer::reduce(state, ClubDetailIntent::Club(AsyncResult::Success(None)));
        assert!(state.not_found);
        assert!(state.status.error.is_none());
    }

    #[test]
    fn membership_status_follows_club_and_requests() {
        let state = ClubDetailReducer::reduce(
            state(),
            ClubDetailIntent::Club(AsyncResult::Success(Some(club(vec![])))),
        );
        assert_eq!(state.membership_status(), MembershipStatus::NotMember);

        let request = MembershipRequest {
            id: RequestId::new("r1"),
            club_id: ClubId::new("chess"),
            user_id: UserId::new("amy"),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        };
        let state = ClubDetailReducer::reduce(
            state,
            ClubDetailIntent::Requests(AsyncResult::Success(vec![request])),
        );
        assert_eq!(state.membership_status(), MembershipStatus::Requested);

        let state = ClubDetailReducer::reduce(
            state,
            ClubDetailIntent::Club(AsyncResult::Success(Some(club(vec!["amy"])))),
        );
        assert_eq!(state.membership_status(), MembershipStatus::Member);
    }
}
