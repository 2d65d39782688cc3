mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::AdminIntent;
pub use reducer::AdminReducer;
pub use state::AdminState;
pub use view_model::AdminViewModel;
