//! Intents for the date counter.

use crate::store::{Action, SliceIntent, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    SetCount(i64),
    SetStep(i64),
    Reset,
}

impl SliceIntent for CounterIntent {
    fn decode(action: &Action) -> Result<Option<Self>, StoreError> {
        let intent = match action.action_type().event() {
            "increment" => CounterIntent::Increment,
            "decrement" => CounterIntent::Decrement,
            "setCount" => CounterIntent::SetCount(action.payload_as()?),
            "setStep" => CounterIntent::SetStep(action.payload_as()?),
            "reset" => CounterIntent::Reset,
            _ => return Ok(None),
        };
        Ok(Some(intent))
    }
}
