//! Action creators for the quiz.

use std::sync::Arc;

use crate::remote::QuestionSource;
use crate::store::{Action, Reducer, Thunk};

use super::reducer::QuizReducer;
use super::state::Question;

fn quiz(event: &str) -> Action {
    Action::namespaced(QuizReducer::NAMESPACE, event)
}

pub fn data_received(questions: Vec<Question>) -> Action {
    quiz("dataReceived").with_payload(questions)
}

pub fn data_failed(message: impl Into<String>) -> Action {
    quiz("dataFailed").with_payload(message.into())
}

pub fn start() -> Action {
    quiz("start")
}

pub fn new_answer(option: usize) -> Action {
    quiz("newAnswer").with_payload(option)
}

pub fn next_question() -> Action {
    quiz("nextQuestion")
}

pub fn finish() -> Action {
    quiz("finish")
}

pub fn restart() -> Action {
    quiz("restart")
}

/// Load questions once. Success dispatches `dataReceived`, any failure
/// dispatches `dataFailed` with the error text. No retry.
pub fn fetch_questions(source: Arc<dyn QuestionSource>) -> Thunk {
    Thunk::spawn("quiz/fetchQuestions", move |store| async move {
        let outcome = match source.fetch().await {
            Ok(questions) => data_received(questions),
            Err(e) => {
                tracing::warn!(error = %e, "question fetch failed");
                data_failed(e.to_string())
            }
        };
        if let Err(e) = store.dispatch(outcome) {
            tracing::error!(error = %e, "failed to dispatch question fetch outcome");
        }
    })
}
