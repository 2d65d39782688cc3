use crate::ui::admin::intent::AdminIntent;
use crate::ui::admin::state::AdminState;
use crate::ui::mvi::Reducer;
use crate::ui::status::merge_field;

pub struct AdminReducer;

impl Reducer for AdminReducer {
    type State = AdminState;
    type Intent = AdminIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AdminIntent::Applications(result) => {
                let (status, applications) = merge_field(state.status, state.applications, result);
                AdminState {
                    status,
                    applications,
                    ..state
                }
            }
            AdminIntent::Users(result) => {
                let (status, users) = merge_field(state.status, state.users, result);
                AdminState {
                    status,
                    users,
                    ..state
                }
            }
        }
    }
}
