//! Action-driven reducer store.
//!
//! # Architecture
//!
//! ```text
//! dispatch(value) ──→ middleware chain ──→ root reducer ──→ commit ──→ subscribers
//!      ↑                   │ (thunks)                                     │
//!      └───────────────────┴──────────── get_state / dispatch ───────────┘
//! ```
//!
//! - **Action**: immutable `{type, payload}` value, type `"<slice>/<event>"`
//! - **Reducer**: pure `(state, intent) -> state` for one slice
//! - **SliceRegistry**: fixed namespace → (reducer, initial state) set
//! - **Store**: owns the [`StateTree`], runs the pipeline, notifies
//! - **Middleware**: pipeline stages; [`ThunkMiddleware`] runs deferred work

mod action;
mod dispatch;
mod error;
mod intent;
mod middleware;
mod reducer;
mod registry;
mod state;
mod subscription;
mod value;

pub use action::{Action, ActionType};
pub use dispatch::{Dispatched, Store};
pub use error::StoreError;
pub use intent::SliceIntent;
pub use middleware::{Dispatchable, LoggingMiddleware, Middleware, Next, Thunk, ThunkMiddleware};
pub use reducer::{Reducer, UnknownAction};
pub use registry::SliceRegistry;
pub use state::{SliceState, StateTree};
pub use subscription::{Subscription, SubscriptionId};
pub use value::SliceValue;

use std::sync::Arc;

/// The middleware chain every bundled store uses: logging, then thunks.
pub fn default_middleware() -> Vec<Arc<dyn Middleware>> {
    vec![Arc::new(LoggingMiddleware), Arc::new(ThunkMiddleware)]
}
