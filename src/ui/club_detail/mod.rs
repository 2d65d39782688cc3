mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::ClubDetailIntent;
pub use reducer::ClubDetailReducer;
pub use state::{ClubDetailState, MembershipStatus};
pub use view_model::ClubDetailViewModel;
