//! Dispatch pipeline stages.
//!
//! Every dispatched value walks the middleware chain in order. A stage can
//! forward the value (`next.run(value)`), transform it, dispatch extra
//! values through the store, or stop the walk by returning without calling
//! `next`. Whatever falls off the end of the chain reaches the root reducer.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;

use super::action::Action;
use super::dispatch::{Dispatched, Store};
use super::error::StoreError;

/// A value accepted by `Store::dispatch`.
pub enum Dispatchable {
    /// Plain action bound for the reducers.
    Action(Action),
    /// Deferred unit of work, run by [`ThunkMiddleware`].
    Thunk(Thunk),
}

impl From<Action> for Dispatchable {
    fn from(action: Action) -> Self {
        Dispatchable::Action(action)
    }
}

impl From<Thunk> for Dispatchable {
    fn from(thunk: Thunk) -> Self {
        Dispatchable::Thunk(thunk)
    }
}

impl fmt::Debug for Dispatchable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatchable::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Dispatchable::Thunk(thunk) => f.debug_tuple("Thunk").field(&thunk.label).finish(),
        }
    }
}

type ThunkFn = Box<dyn FnOnce(Store) -> Result<Dispatched, StoreError> + Send>;

/// Deferred work that receives the store instead of reaching a reducer.
///
/// The thunk gets a [`Store`] handle, which is both `dispatch` and
/// `get_state`. It reports outcomes by dispatching plain actions.
pub struct Thunk {
    label: String,
    run: ThunkFn,
}

impl Thunk {
    /// Synchronous thunk. Runs to completion inside `dispatch`.
    pub fn new<F>(label: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(Store) + Send + 'static,
    {
        Self {
            label: label.into(),
            run: Box::new(move |store| {
                f(store);
                Ok(Dispatched::Ran)
            }),
        }
    }

    /// Async thunk. The future is spawned on the current tokio runtime and
    /// `dispatch` returns [`Dispatched::Spawned`] without waiting for it.
    pub fn spawn<F, Fut>(label: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(Store) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let label = label.into();
        let task_label = label.clone();
        Self {
            label,
            run: Box::new(move |store| {
                let runtime = tokio::runtime::Handle::try_current().map_err(|_| {
                    StoreError::NoRuntime {
                        label: task_label.clone(),
                    }
                })?;
                let span = tracing::debug_span!("thunk", label = %task_label);
                let task = async move {
                    f(store).await;
                    tracing::debug!("thunk settled");
                };
                Ok(Dispatched::Spawned(runtime.spawn(task.instrument(span))))
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn run(self, store: Store) -> Result<Dispatched, StoreError> {
        (self.run)(store)
    }
}

/// A dispatch pipeline stage.
pub trait Middleware: Send + Sync + 'static {
    fn handle(
        &self,
        store: &Store,
        value: Dispatchable,
        next: Next<'_>,
    ) -> Result<Dispatched, StoreError>;
}

/// The rest of the chain after the current stage.
pub struct Next<'a> {
    store: &'a Store,
    remaining: &'a [Arc<dyn Middleware>],
}

impl<'a> Next<'a> {
    pub(crate) fn new(store: &'a Store, remaining: &'a [Arc<dyn Middleware>]) -> Self {
        Self { store, remaining }
    }

    /// Hand `value` to the next stage, or to the reducers if none is left.
    pub fn run(self, value: Dispatchable) -> Result<Dispatched, StoreError> {
        match self.remaining.split_first() {
            Some((stage, rest)) => stage.handle(self.store, value, Next::new(self.store, rest)),
            None => self.store.reduce_stage(value),
        }
    }
}

/// Runs thunks, forwards plain actions untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThunkMiddleware;

impl Middleware for ThunkMiddleware {
    fn handle(
        &self,
        store: &Store,
        value: Dispatchable,
        next: Next<'_>,
    ) -> Result<Dispatched, StoreError> {
        match value {
            Dispatchable::Thunk(thunk) => {
                tracing::debug!(thunk = %thunk.label(), "running thunk");
                thunk.run(store.clone())
            }
            action => next.run(action),
        }
    }
}

/// Records every dispatched value and its outcome at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn handle(
        &self,
        _store: &Store,
        value: Dispatchable,
        next: Next<'_>,
    ) -> Result<Dispatched, StoreError> {
        match &value {
            Dispatchable::Action(action) => tracing::debug!(
                action = %action.action_type(),
                has_payload = action.payload().is_some(),
                "dispatch"
            ),
            Dispatchable::Thunk(thunk) => tracing::debug!(thunk = %thunk.label(), "dispatch"),
        }

        let started = Instant::now();
        let result = next.run(value);
        let elapsed_us = started.elapsed().as_micros() as u64;

        match &result {
            Ok(outcome) => tracing::debug!(?outcome, elapsed_us, "dispatch finished"),
            Err(e) => tracing::warn!(error = %e, elapsed_us, "dispatch failed"),
        }
        result
    }
}
