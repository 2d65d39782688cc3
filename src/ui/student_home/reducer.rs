use crate::ui::mvi::Reducer;
use crate::ui::status::merge_field;
use crate::ui::student_home::intent::StudentHomeIntent;
use crate::ui::student_home::state::StudentHomeState;

pub struct StudentHomeReducer;

impl Reducer for StudentHomeReducer {
    type State = StudentHomeState;
    type Intent = StudentHomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StudentHomeIntent::Clubs(result) => {
                let (status, clubs) = merge_field(state.status, state.clubs, result);
                StudentHomeState {
                    status,
                    clubs,
                    ..state
                }
            }
            StudentHomeIntent::Events(result) => {
                let (status, events) = merge_field(state.status, state.events, result);
                StudentHomeState {
                    status,
                    events,
                    ..state
                }
            }
            StudentHomeIntent::Registrations(result) => {
                let (status, registrations) =
                    merge_field(state.status, state.registrations, result);
                StudentHomeState {
                    status,
                    registrations,
                    ..state
                }
            }
            StudentHomeIntent::Applications(result) => {
                let (status, applications) = merge_field(state.status, state.applications, result);
                StudentHomeState {
                    status,
                    applications,
                    ..state
                }
            }
        }
    }
}
