use crate::domain::Club;
use crate::ui::club_browse::filter::ALL_CATEGORIES;
use crate::ui::mvi::UiState;
use crate::ui::status::LoadStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct ClubBrowseState {
    pub status: LoadStatus,
    /// Every active club, as last delivered by the store.
    pub clubs: Vec<Club>,
    pub query: String,
    pub category: String,
    pub categories: Vec<String>,
    /// `clubs` narrowed by `query` and `category`.
    pub filtered: Vec<Club>,
}

impl ClubBrowseState {
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }
}

impl Default for ClubBrowseState {
    fn default() -> Self {
        Self {
            status: LoadStatus::default(),
            clubs: Vec::new(),
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            categories: vec![ALL_CATEGORIES.to_string()],
            filtered: Vec::new(),
        }
    }
}

impl UiState for ClubBrowseState {
    fn status(&self) -> &LoadStatus {
        &self.status
    }
}
