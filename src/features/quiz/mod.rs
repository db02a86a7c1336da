//! Quiz feature module.
//!
//! Questions arrive from an HTTP endpoint once at startup; the reducer then
//! drives the `ready → active → finished` flow and keeps score.

mod actions;
mod intent;
mod reducer;
mod state;

pub use actions::{
    data_failed, data_received, fetch_questions, finish, new_answer, next_question, restart, start,
};
pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use state::{Question, QuizState, QuizStatus};
