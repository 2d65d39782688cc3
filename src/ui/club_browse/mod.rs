mod filter;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use filter::{categories, filter_clubs, ALL_CATEGORIES};
pub use intent::ClubBrowseIntent;
pub use reducer::ClubBrowseReducer;
pub use state::ClubBrowseState;
pub use view_model::ClubBrowseViewModel;
