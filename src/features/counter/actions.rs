//! Action creators for the date counter.

use crate::store::{Action, Reducer};

use super::reducer::CounterReducer;

fn counter(event: &str) -> Action {
    Action::namespaced(CounterReducer::NAMESPACE, event)
}

pub fn increment() -> Action {
    counter("increment")
}

pub fn decrement() -> Action {
    counter("decrement")
}

pub fn set_count(count: i64) -> Action {
    counter("setCount").with_payload(count)
}

pub fn set_step(step: i64) -> Action {
    counter("setStep").with_payload(step)
}

pub fn reset() -> Action {
    counter("reset")
}
