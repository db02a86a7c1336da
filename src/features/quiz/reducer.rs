//! Reducer for the quiz.

use std::sync::Arc;

use crate::store::{Reducer, UnknownAction};

use super::intent::QuizIntent;
use super::state::{QuizState, QuizStatus};

/// Quiz reducer. Strict: an unknown `quiz/*` event is an error.
///
/// Events that do not fit the current status (answering while `Ready`,
/// starting twice) leave the state untouched.
pub struct QuizReducer;

impl Reducer for QuizReducer {
    const NAMESPACE: &'static str = "quiz";
    const UNKNOWN: UnknownAction = UnknownAction::Reject;

    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: &Arc<Self::State>, intent: Self::Intent) -> Arc<Self::State> {
        match intent {
            QuizIntent::DataReceived(questions) => Arc::new(QuizState {
                questions,
                status: QuizStatus::Ready,
                error_message: String::new(),
                ..QuizState::clone(state)
            }),

            QuizIntent::DataFailed(message) => Arc::new(QuizState {
                status: QuizStatus::Error,
                error_message: message,
                ..QuizState::clone(state)
            }),

            QuizIntent::Start if state.status == QuizStatus::Ready && !state.questions.is_empty() => {
                Arc::new(QuizState {
                    status: QuizStatus::Active,
                    index: 0,
                    answer: None,
                    points: 0,
                    ..QuizState::clone(state)
                })
            }

            QuizIntent::NewAnswer(option)
                if state.status == QuizStatus::Active && state.answer.is_none() =>
            {
                let Some(question) = state.current_question() else {
                    return Arc::clone(state);
                };
                if option >= question.options.len() {
                    return Arc::clone(state);
                }
                let earned = if option == question.correct_option {
                    question.points
                } else {
                    0
                };
                Arc::new(QuizState {
                    answer: Some(option),
                    points: state.points + earned,
                    ..QuizState::clone(state)
                })
            }

            QuizIntent::NextQuestion
                if state.status == QuizStatus::Active
                    && state.answer.is_some()
                    && !state.is_last_question() =>
            {
                Arc::new(QuizState {
                    index: state.index + 1,
                    answer: None,
                    ..QuizState::clone(state)
                })
            }

            QuizIntent::Finish if state.status == QuizStatus::Active => Arc::new(QuizState {
                status: QuizStatus::Finished,
                highscore: state.highscore.max(state.points),
                ..QuizState::clone(state)
            }),

            QuizIntent::Restart
                if matches!(state.status, QuizStatus::Active | QuizStatus::Finished) =>
            {
                Arc::new(QuizState {
                    status: QuizStatus::Ready,
                    index: 0,
                    answer: None,
                    points: 0,
                    ..QuizState::clone(state)
                })
            }

            _ => Arc::clone(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::quiz::Question;

    fn questions() -> Vec<Question> {
        vec![
            Question {
                question: "Which is the most popular JavaScript framework?".into(),
                options: vec!["Angular".into(), "React".into(), "Svelte".into()],
                correct_option: 1,
                points: 10,
            },
            Question {
                question: "Which company invented React?".into(),
                options: vec!["Google".into(), "Meta".into()],
                correct_option: 1,
                points: 20,
            },
        ]
    }

    fn active() -> Arc<QuizState> {
        let state = Arc::new(QuizState::default());
        let ready = QuizReducer::reduce(&state, QuizIntent::DataReceived(questions()));
        QuizReducer::reduce(&ready, QuizIntent::Start)
    }

    #[test]
    fn data_received_makes_quiz_ready() {
        let state = Arc::new(QuizState::default());
        let next = QuizReducer::reduce(&state, QuizIntent::DataReceived(questions()));
        assert_eq!(next.status, QuizStatus::Ready);
        assert_eq!(next.questions.len(), 2);
        assert_eq!(next.max_possible_points(), 30);
    }

    #[test]
    fn data_failed_records_message() {
        let state = Arc::new(QuizState::default());
        let next = QuizReducer::reduce(&state, QuizIntent::DataFailed("Failed to fetch".into()));
        assert_eq!(next.status, QuizStatus::Error);
        assert_eq!(next.error_message, "Failed to fetch");
    }

    #[test]
    fn start_requires_ready() {
        let state = Arc::new(QuizState::default());
        let next = QuizReducer::reduce(&state, QuizIntent::Start);
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn correct_answer_scores_once() {
        let state = active();
        let answered = QuizReducer::reduce(&state, QuizIntent::NewAnswer(1));
        assert_eq!(answered.points, 10);
        let again = QuizReducer::reduce(&answered, QuizIntent::NewAnswer(1));
        assert!(Arc::ptr_eq(&answered, &again));
    }

    #[test]
    fn wrong_or_out_of_range_answers_score_nothing() {
        let state = active();
        let wrong = QuizReducer::reduce(&state, QuizIntent::NewAnswer(0));
        assert_eq!(wrong.points, 0);
        assert_eq!(wrong.answer, Some(0));
        let out_of_range = QuizReducer::reduce(&state, QuizIntent::NewAnswer(9));
        assert!(Arc::ptr_eq(&state, &out_of_range));
    }

    #[test]
    fn full_run_updates_highscore_and_restart_keeps_it() {
        let state = active();
        let state = QuizReducer::reduce(&state, QuizIntent::NewAnswer(1));
        let state = QuizReducer::reduce(&state, QuizIntent::NextQuestion);
        assert_eq!(state.index, 1);
        let state = QuizReducer::reduce(&state, QuizIntent::NewAnswer(1));
        let stuck = QuizReducer::reduce(&state, QuizIntent::NextQuestion);
        assert!(Arc::ptr_eq(&state, &stuck));

        let finished = QuizReducer::reduce(&state, QuizIntent::Finish);
        assert_eq!(finished.status, QuizStatus::Finished);
        assert_eq!(finished.highscore, 30);

        let restarted = QuizReducer::reduce(&finished, QuizIntent::Restart);
        assert_eq!(restarted.status, QuizStatus::Ready);
        assert_eq!(restarted.points, 0);
        assert_eq!(restarted.highscore, 30);
        assert_eq!(restarted.questions.len(), 2);
    }
}
