use crate::async_result::AsyncResult;
use crate::domain::{ClubApplication, User};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AdminIntent {
    Applications(AsyncResult<Vec<ClubApplication>>),
    Users(AsyncResult<Vec<User>>),
}

impl Intent for AdminIntent {}
