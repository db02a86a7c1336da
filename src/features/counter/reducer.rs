//! Reducer for the date counter.

use std::sync::Arc;

use crate::store::{Reducer, UnknownAction};

use super::intent::CounterIntent;
use super::state::CounterState;

/// Counter reducer. Strict: an unknown `counter/*` event is an error.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    const NAMESPACE: &'static str = "counter";
    const UNKNOWN: UnknownAction = UnknownAction::Reject;

    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: &Arc<Self::State>, intent: Self::Intent) -> Arc<Self::State> {
        match intent {
            CounterIntent::Increment => Arc::new(CounterState {
                count: state.count.saturating_add(state.step),
                ..CounterState::clone(state)
            }),
            CounterIntent::Decrement => Arc::new(CounterState {
                count: state.count.saturating_sub(state.step),
                ..CounterState::clone(state)
            }),
            CounterIntent::SetCount(count) => Arc::new(CounterState {
                count,
                ..CounterState::clone(state)
            }),
            CounterIntent::SetStep(step) => Arc::new(CounterState {
                step,
                ..CounterState::clone(state)
            }),
            // Back to the initial value, step included.
            CounterIntent::Reset => Arc::new(CounterState::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_and_decrement_use_step() {
        let state = Arc::new(CounterState { step: 3, count: 0 });
        let up = CounterReducer::reduce(&state, CounterIntent::Increment);
        assert_eq!(up.count, 3);
        let down = CounterReducer::reduce(&up, CounterIntent::Decrement);
        assert_eq!(down.count, 0);
    }

    #[test]
    fn reset_restores_step_too() {
        let state = Arc::new(CounterState { step: 3, count: 6 });
        let next = CounterReducer::reduce(&state, CounterIntent::Reset);
        assert_eq!(*next, CounterState { step: 1, count: 0 });
    }

    #[test]
    fn set_count_and_step_replace_values() {
        let state = Arc::new(CounterState::default());
        let state = CounterReducer::reduce(&state, CounterIntent::SetStep(5));
        let state = CounterReducer::reduce(&state, CounterIntent::SetCount(-2));
        assert_eq!(*state, CounterState { step: 5, count: -2 });
    }
}
