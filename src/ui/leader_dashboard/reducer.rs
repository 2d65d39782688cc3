use crate::ui::leader_dashboard::intent::LeaderDashboardIntent;
use crate::ui::leader_dashboard::state::LeaderDashboardState;
use crate::ui::mvi::Reducer;
use crate::ui::status::merge_field;

pub struct LeaderDashboardReducer;

impl Reducer for LeaderDashboardReducer {
    type State = LeaderDashboardState;
    type Intent = LeaderDashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LeaderDashboardIntent::LedClubs(result) => {
                let club_id = state.club_id.clone();
                let result = result.map(|clubs| clubs.into_iter().find(|club| club.id == club_id));
                let (status, club) = merge_field(state.status, state.club, result);
                LeaderDashboardState {
                    status,
                    club,
                    ..state
                }
            }
            LeaderDashboardIntent::Requests(result) => {
                let (status, pending_requests) =
                    merge_field(state.status, state.pending_requests, result);
                LeaderDashboardState {
                    status,
                    pending_requests,
                    ..state
                }
            }
            LeaderDashboardIntent::Events(result) => {
                let (status, events) = merge_field(state.status, state.events, result);
                LeaderDashboardState {
                    status,
                    events,
                    ..state
                }
            }
            LeaderDashboardIntent::Announcements(result) => {
                let (status, announcements) = merge_field(state.status, state.announcements, result);
                LeaderDashboardState {
                    status,
                    announcements,
                    ..state
                }
            }
        }
    }
}
