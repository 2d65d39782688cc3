mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::LeaderDashboardIntent;
pub use reducer::LeaderDashboardReducer;
pub use state::LeaderDashboardState;
pub use view_model::{EventDraft, LeaderDashboardViewModel};
