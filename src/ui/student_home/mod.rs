mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::StudentHomeIntent;
pub use reducer::StudentHomeReducer;
pub use state::StudentHomeState;
pub use view_model::{ApplicationDraft, StudentHomeViewModel};
