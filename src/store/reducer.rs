//! Reducer trait and its type-erased form used by the root reducer.

use std::marker::PhantomData;
use std::sync::Arc;

use super::action::Action;
use super::error::StoreError;
use super::intent::SliceIntent;
use super::state::SliceState;
use super::value::SliceValue;

/// What a slice does with an event in its own namespace it cannot decode.
///
/// Actions from other namespaces never reach this decision; the root
/// reducer always passes them through as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownAction {
    /// Return the state unchanged.
    Ignore,
    /// Fail the dispatch with [`StoreError::UnknownAction`].
    Reject,
}

/// Reducer transforms a slice state based on intents.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function: `(&Arc<State>, Intent) -> Arc<State>`. Returning the
/// input `Arc` signals "nothing changed"; any change is a fresh `Arc`.
pub trait Reducer: Send + Sync + 'static {
    /// Namespace prefix of every action this slice handles.
    const NAMESPACE: &'static str;

    /// Policy for unrecognized events in [`Self::NAMESPACE`].
    const UNKNOWN: UnknownAction = UnknownAction::Ignore;

    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: SliceIntent;

    /// Process an intent and return the new state.
    fn reduce(state: &Arc<Self::State>, intent: Self::Intent) -> Arc<Self::State>;
}

/// Object-safe reducer over type-erased slice values.
pub(crate) trait ErasedReducer: Send + Sync {
    fn reduce(&self, state: &SliceValue, action: &Action) -> Result<SliceValue, StoreError>;

    fn to_json(&self, state: &SliceValue) -> serde_json::Value;
}

pub(crate) struct TypedReducer<R>(PhantomData<fn() -> R>);

impl<R> TypedReducer<R> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R: Reducer> ErasedReducer for TypedReducer<R> {
    fn reduce(&self, state: &SliceValue, action: &Action) -> Result<SliceValue, StoreError> {
        if action.action_type().namespace() != R::NAMESPACE {
            return Ok(state.clone());
        }

        let typed = state
            .downcast::<R::State>()
            .ok_or_else(|| StoreError::SliceTypeMismatch {
                namespace: R::NAMESPACE.to_string(),
            })?;

        let Some(intent) = R::Intent::decode(action)? else {
            return match R::UNKNOWN {
                UnknownAction::Ignore => {
                    tracing::trace!(slice = R::NAMESPACE, action = %action.action_type(), "unhandled event ignored");
                    Ok(state.clone())
                }
                UnknownAction::Reject => Err(StoreError::UnknownAction {
                    namespace: R::NAMESPACE.to_string(),
                    action_type: action.action_type().to_string(),
                }),
            };
        };

        let next = R::reduce(&typed, intent);
        if Arc::ptr_eq(&next, &typed) {
            Ok(state.clone())
        } else {
            Ok(SliceValue::from_arc(next))
        }
    }

    fn to_json(&self, state: &SliceValue) -> serde_json::Value {
        state
            .downcast_ref::<R::State>()
            .and_then(|s| serde_json::to_value(s).ok())
            .unwrap_or(serde_json::Value::Null)
    }
}
