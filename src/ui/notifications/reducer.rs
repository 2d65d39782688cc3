use crate::async_result::AsyncResult;
use crate::ui::mvi::Reducer;
use crate::ui::notifications::intent::NotificationsIntent;
use crate::ui::notifications::state::NotificationsState;

pub struct NotificationsReducer;

impl Reducer for NotificationsReducer {
    type State = NotificationsState;
    type Intent = NotificationsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationsIntent::Loaded(result) => {
                let status = state.status.clone().merge(&result);
                match result {
                    AsyncResult::Success(mut notifications) => {
                        let unread_count = notifications.iter().filter(|n| !n.read).count();
                        if state.limit > 0 {
                            notifications.truncate(state.limit);
                        }
                        NotificationsState {
                            status,
                            notifications,
                            unread_count,
                            ..state
                        }
                    }
                    AsyncResult::Pending | AsyncResult::Failure(_) => {
                        NotificationsState { status, ..state }
                    }
                }
            }
            NotificationsIntent::ActionFailed(message) => NotificationsState {
                status: state.status.clone().failed(message),
                ..state
            },
        }
    }
}
