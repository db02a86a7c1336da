//! Reducer for the customer slice.

use std::sync::Arc;

use crate::store::Reducer;

use super::intent::CustomerIntent;
use super::state::CustomerState;

pub struct CustomerReducer;

impl Reducer for CustomerReducer {
    const NAMESPACE: &'static str = "customer";

    type State = CustomerState;
    type Intent = CustomerIntent;

    fn reduce(state: &Arc<Self::State>, intent: Self::Intent) -> Arc<Self::State> {
        match intent {
            CustomerIntent::Create {
                full_name,
                id,
                created_at,
            } => Arc::new(CustomerState {
                id,
                full_name,
                created_at: Some(created_at),
            }),
            CustomerIntent::UpdateName { full_name } => Arc::new(CustomerState {
                full_name,
                ..CustomerState::clone(state)
            }),
        }
    }
}
