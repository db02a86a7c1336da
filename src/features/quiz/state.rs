//! State for the quiz.

use serde::{Deserialize, Serialize};

use crate::store::SliceState;

/// One multiple-choice question as served by the question endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub points: u32,
}

/// Quiz lifecycle: `Loading → Ready → Active → Finished`, or `Error` when
/// the questions could not be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    #[default]
    Loading,
    Error,
    Ready,
    Active,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub questions: Vec<Question>,
    pub status: QuizStatus,
    pub error_message: String,
    /// Position of the current question.
    pub index: usize,
    /// Option picked for the current question, if any.
    pub answer: Option<usize>,
    pub points: u32,
    pub highscore: u32,
}

impl SliceState for QuizState {}

impl QuizState {
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn max_possible_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }
}
