use crate::async_result::AsyncResult;
use crate::domain::Club;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ClubBrowseIntent {
    ClubsLoaded(AsyncResult<Vec<Club>>),
    QueryChanged(String),
    CategoryChanged(String),
}

impl Intent for ClubBrowseIntent {}
