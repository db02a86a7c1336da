//! Customer feature module: the account holder's identity.

mod actions;
mod intent;
mod reducer;
mod state;

pub use actions::{create_customer, update_name};
pub use intent::CustomerIntent;
pub use reducer::CustomerReducer;
pub use state::CustomerState;
