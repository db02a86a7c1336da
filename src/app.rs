//! Store construction and the collaborators injected into thunks.

use std::sync::Arc;

use crate::config::Config;
use crate::features::account::AccountReducer;
use crate::features::counter::{CounterReducer, CounterState};
use crate::features::customer::CustomerReducer;
use crate::features::quiz::QuizReducer;
use crate::remote::{
    CurrencyConverter, FrankfurterClient, HttpQuestionSource, QuestionSource, RemoteError,
};
use crate::store::{default_middleware, SliceRegistry, Store, StoreError};

/// External services handed to the thunks that need them.
#[derive(Clone)]
pub struct Services {
    pub converter: Arc<dyn CurrencyConverter>,
    pub questions: Arc<dyn QuestionSource>,
}

impl Services {
    /// HTTP-backed services built from configuration.
    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        Ok(Self {
            converter: Arc::new(FrankfurterClient::new(&config.currency)?),
            questions: Arc::new(HttpQuestionSource::new(&config.quiz)?),
        })
    }
}

/// `account` + `customer`, with logging and thunk middleware.
pub fn bank_store() -> Result<Store, StoreError> {
    let mut registry = SliceRegistry::new();
    registry
        .register_default::<AccountReducer>()?
        .register_default::<CustomerReducer>()?;
    Store::new(registry, default_middleware())
}

/// Single `counter` slice starting from `initial`.
pub fn counter_store(initial: CounterState) -> Result<Store, StoreError> {
    let mut registry = SliceRegistry::new();
    registry.register::<CounterReducer>(initial)?;
    Store::new(registry, default_middleware())
}

/// Single `quiz` slice in its loading state.
pub fn quiz_store() -> Result<Store, StoreError> {
    let mut registry = SliceRegistry::new();
    registry.register_default::<QuizReducer>()?;
    Store::new(registry, default_middleware())
}
