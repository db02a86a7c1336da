//! The store: state owner, dispatch pipeline, subscriber fan-out.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};
use tokio::task::JoinHandle;

use super::action::Action;
use super::error::StoreError;
use super::middleware::{Dispatchable, Middleware, Next};
use super::registry::{RootReducer, SliceRegistry};
use super::state::StateTree;
use super::subscription::{Subscribers, Subscription};

/// Result of a successful `dispatch`.
#[derive(Debug)]
pub enum Dispatched {
    /// The action went through the reducers; `changed` is false when every
    /// slice returned its previous state.
    Reduced { changed: bool },
    /// Dispatched from inside another dispatch on the same thread. The
    /// action passed validation and is applied before that outer dispatch
    /// returns.
    Queued,
    /// A synchronous thunk ran to completion.
    Ran,
    /// An async thunk was spawned. Await the handle to observe its outcome.
    Spawned(JoinHandle<()>),
    /// A middleware stopped the value before the reducers.
    Halted,
}

impl Dispatched {
    /// Task handle of a spawned thunk.
    pub fn into_task(self) -> Option<JoinHandle<()>> {
        match self {
            Dispatched::Spawned(handle) => Some(handle),
            _ => None,
        }
    }
}

#[derive(Default)]
struct DispatchQueue {
    draining: bool,
    pending: VecDeque<Action>,
}

struct Shared {
    root: RootReducer,
    middleware: Vec<Arc<dyn Middleware>>,
    state: RwLock<StateTree>,
    subscribers: Arc<Subscribers>,
    /// Serializes commits across threads; reentrant so a subscriber on the
    /// committing thread can dispatch without deadlocking.
    gate: ReentrantMutex<RefCell<DispatchQueue>>,
}

/// Handle to a reducer store.
///
/// Cheap to clone; all clones share one state tree. Pass it explicitly to
/// whatever needs to read or dispatch.
#[derive(Clone)]
pub struct Store {
    shared: Arc<Shared>,
}

impl Store {
    /// Build a store from a fixed slice set and an ordered middleware chain.
    ///
    /// # Errors
    /// `EmptyRegistry` if no slice was registered.
    pub fn new(
        registry: SliceRegistry,
        middleware: Vec<Arc<dyn Middleware>>,
    ) -> Result<Self, StoreError> {
        let (root, initial) = registry.into_root()?;
        tracing::debug!(
            slices = initial.len(),
            middleware = middleware.len(),
            "store created"
        );
        Ok(Self {
            shared: Arc::new(Shared {
                root,
                middleware,
                state: RwLock::new(initial),
                subscribers: Arc::new(Subscribers::default()),
                gate: ReentrantMutex::new(RefCell::new(DispatchQueue::default())),
            }),
        })
    }

    /// Current snapshot. Never blocks on an in-flight dispatch for longer
    /// than the pointer swap.
    pub fn get_state(&self) -> StateTree {
        self.shared.state.read().clone()
    }

    /// Whole tree as JSON, one key per slice.
    pub fn state_json(&self) -> serde_json::Value {
        self.shared.root.to_json(&self.get_state())
    }

    /// The single mutation entry point.
    ///
    /// Walks the middleware chain, then the reducers. A reducer error leaves
    /// the previous state in place and is returned here.
    pub fn dispatch(&self, value: impl Into<Dispatchable>) -> Result<Dispatched, StoreError> {
        Next::new(self, &self.shared.middleware).run(value.into())
    }

    /// Register `callback` to run after every committed change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.shared.subscribers.add(Box::new(callback));
        Subscription::new(id, Arc::downgrade(&self.shared.subscribers))
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.len()
    }

    /// Terminal pipeline stage.
    pub(crate) fn reduce_stage(&self, value: Dispatchable) -> Result<Dispatched, StoreError> {
        match value {
            Dispatchable::Action(action) => self.commit(action),
            Dispatchable::Thunk(thunk) => Err(StoreError::UnhandledThunk {
                label: thunk.label().to_string(),
            }),
        }
    }

    /// Apply `action` and everything queued behind it.
    ///
    /// The result always describes `action` alone. A nested dispatch on the
    /// committing thread is checked against the current tree before it is
    /// queued, so payload and unknown-event errors go back to the caller that
    /// issued it. Anything a queued action still fails on when it is applied
    /// is logged and dropped.
    fn commit(&self, action: Action) -> Result<Dispatched, StoreError> {
        let gate = self.shared.gate.lock();
        let draining = gate.borrow().draining;
        if draining {
            self.shared.root.reduce(&self.get_state(), &action)?;
            tracing::trace!(action = %action.action_type(), "queued behind in-flight dispatch");
            gate.borrow_mut().pending.push_back(action);
            return Ok(Dispatched::Queued);
        }
        gate.borrow_mut().draining = true;
        let _reset = scopeguard::guard((), |_| {
            let mut queue = gate.borrow_mut();
            queue.draining = false;
            queue.pending.clear();
        });

        let result = self.apply(&action);

        loop {
            let next = gate.borrow_mut().pending.pop_front();
            let Some(queued) = next else {
                break;
            };
            if let Err(e) = self.apply(&queued) {
                tracing::warn!(action = %queued.action_type(), error = %e, "queued action rejected");
            }
        }

        result.map(|changed| Dispatched::Reduced { changed })
    }

    /// One reducer pass plus notification. Caller holds the gate.
    fn apply(&self, action: &Action) -> Result<bool, StoreError> {
        let current = self.get_state();
        let next = self.shared.root.reduce(&current, action)?;
        if next.ptr_eq(&current) {
            tracing::trace!(action = %action.action_type(), "no slice changed");
            return Ok(false);
        }

        *self.shared.state.write() = next;
        let notified = self.shared.subscribers.notify();
        tracing::debug!(action = %action.action_type(), notified, "state committed");
        Ok(true)
    }
}
