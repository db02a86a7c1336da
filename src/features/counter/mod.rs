//! Date counter feature module.
//!
//! A count moved by a configurable step, rendered as a date offset from a
//! fixed base day.

mod actions;
mod intent;
mod reducer;
mod state;

pub use actions::{decrement, increment, reset, set_count, set_step};
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
