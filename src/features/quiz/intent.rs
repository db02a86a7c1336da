//! Intents for the quiz.

use crate::store::{Action, SliceIntent, StoreError};

use super::state::Question;

#[derive(Debug, Clone, PartialEq)]
pub enum QuizIntent {
    DataReceived(Vec<Question>),
    DataFailed(String),
    Start,
    /// Index of the picked option.
    NewAnswer(usize),
    NextQuestion,
    Finish,
    Restart,
}

impl SliceIntent for QuizIntent {
    fn decode(action: &Action) -> Result<Option<Self>, StoreError> {
        let intent = match action.action_type().event() {
            "dataReceived" => QuizIntent::DataReceived(action.payload_as()?),
            "dataFailed" => QuizIntent::DataFailed(action.payload_as()?),
            "start" => QuizIntent::Start,
            "newAnswer" => QuizIntent::NewAnswer(action.payload_as()?),
            "nextQuestion" => QuizIntent::NextQuestion,
            "finish" => QuizIntent::Finish,
            "restart" => QuizIntent::Restart,
            _ => return Ok(None),
        };
        Ok(Some(intent))
    }
}
