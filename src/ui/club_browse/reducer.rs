use crate::ui::club_browse::filter::{categories, filter_clubs};
use crate::ui::club_browse::intent::ClubBrowseIntent;
use crate::ui::club_browse::state::ClubBrowseState;
use crate::ui::mvi::Reducer;
use crate::ui::status::merge_field;

pub struct ClubBrowseReducer;

impl Reducer for ClubBrowseReducer {
    type State = ClubBrowseState;
    type Intent = ClubBrowseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let state = match intent {
            ClubBrowseIntent::ClubsLoaded(result) => {
                let (status, clubs) = merge_field(state.status, state.clubs, result);
                ClubBrowseState {
                    status,
                    categories: categories(&clubs),
                    clubs,
                    ..state
                }
            }
            ClubBrowseIntent::QueryChanged(query) => ClubBrowseState { query, ..state },
            ClubBrowseIntent::CategoryChanged(category) => ClubBrowseState { category, ..state },
        };
        refilter(state)
    }
}

fn refilter(state: ClubBrowseState) -> ClubBrowseState {
    let filtered = filter_clubs(&state.clubs, &state.query, &state.category);
    ClubBrowseState { filtered, ..state }
}
