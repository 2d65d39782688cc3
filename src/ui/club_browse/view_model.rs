use std::sync::Arc;

use crate::domain::{Club, ClubQuery};
use crate::repository::Repository;
use crate::ui::club_browse::intent::ClubBrowseIntent;
use crate::ui::club_browse::reducer::ClubBrowseReducer;
use crate::ui::club_browse::state::ClubBrowseState;
use crate::ui::screen::Screen;
use crate::ui::store::ViewStore;

/// Catalogue of active clubs with search and category filtering.
pub struct ClubBrowseViewModel {
    store: ViewStore<ClubBrowseReducer>,
    clubs: Arc<dyn Repository<Club>>,
}

impl ClubBrowseViewModel {
    pub fn new(clubs: Arc<dyn Repository<Club>>, default_category: &str) -> Self {
        Self {
            store: ViewStore::with_state(
                "club_browse",
                ClubBrowseState::with_category(default_category),
            ),
            clubs,
        }
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.store.dispatch(ClubBrowseIntent::QueryChanged(query.into()));
    }

    pub fn set_category(&self, category: impl Into<String>) {
        self.store
            .dispatch(ClubBrowseIntent::CategoryChanged(category.into()));
    }
}

impl Screen for ClubBrowseViewModel {
    type Reducer = ClubBrowseReducer;

    fn store(&self) -> &ViewStore<ClubBrowseReducer> {
        &self.store
    }

    fn activate(&self) {
        if !self.store.begin_activation() {
            return;
        }
        self.store.bind(
            self.clubs.query_stream(ClubQuery::Active),
            ClubBrowseIntent::ClubsLoaded,
        );
    }
}
