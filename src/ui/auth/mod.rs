mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{AuthIntent, SignedIn};
pub use reducer::AuthReducer;
pub use state::AuthState;
pub use view_model::AuthViewModel;
