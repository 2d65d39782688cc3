mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::NotificationsIntent;
pub use reducer::NotificationsReducer;
pub use state::NotificationsState;
pub use view_model::NotificationsViewModel;
