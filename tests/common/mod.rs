//! Shared test utilities and fakes for the remote collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use parking_lot::Mutex;
use slicebank::features::quiz::Question;
use slicebank::money::Money;
use slicebank::remote::{CurrencyConverter, QuestionSource, RemoteError};
use slicebank::store::Store;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Converter whose answer is held back until the test releases it.
pub struct GatedConverter {
    gate: Mutex<Option<oneshot::Receiver<Result<Money, String>>>>,
    pub calls: AtomicUsize,
}

impl GatedConverter {
    pub fn new() -> (Arc<Self>, oneshot::Sender<Result<Money, String>>) {
        let (tx, rx) = oneshot::channel();
        let converter = Arc::new(Self {
            gate: Mutex::new(Some(rx)),
            calls: AtomicUsize::new(0),
        });
        (converter, tx)
    }
}

#[async_trait]
impl CurrencyConverter for GatedConverter {
    async fn convert(&self, _amount: Money, _from: &str, _to: &str) -> Result<Money, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rx = self.gate.lock().take().expect("converter called twice");
        match rx.await {
            Ok(Ok(converted)) => Ok(converted),
            Ok(Err(currency)) => Err(RemoteError::InvalidCurrency(currency)),
            Err(_) => Err(RemoteError::InvalidCurrency("gate dropped".into())),
        }
    }
}

/// Converter applying a fixed rate immediately.
pub struct FixedRate(pub f64);

#[async_trait]
impl CurrencyConverter for FixedRate {
    async fn convert(&self, amount: Money, _from: &str, _to: &str) -> Result<Money, RemoteError> {
        Ok(Money::from_f64(amount.as_f64() * self.0).expect("finite amount"))
    }
}

/// Question source returning a canned list.
pub struct StaticQuestions(pub Vec<Question>);

#[async_trait]
impl QuestionSource for StaticQuestions {
    async fn fetch(&self) -> Result<Vec<Question>, RemoteError> {
        Ok(self.0.clone())
    }
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question {
            question: "Which is the most popular JavaScript framework?".into(),
            options: vec!["Angular".into(), "React".into(), "Svelte".into(), "Vue".into()],
            correct_option: 1,
            points: 10,
        },
        Question {
            question: "Which company invented React?".into(),
            options: vec!["Google".into(), "Apple".into(), "Netflix".into(), "Facebook".into()],
            correct_option: 3,
            points: 10,
        },
    ]
}

pub const QUESTIONS_JSON: &str = r#"[
    {"question": "Which is the most popular JavaScript framework?", "options": ["Angular", "React", "Svelte", "Vue"], "correctOption": 1, "points": 10},
    {"question": "Which company invented React?", "options": ["Google", "Apple", "Netflix", "Facebook"], "correctOption": 3, "points": 10}
]"#;

/// Record every commit observed through `get_state` by a subscriber.
pub fn record_commits<T, F>(store: &Store, read: F) -> Arc<Mutex<Vec<T>>>
where
    T: Send + 'static,
    F: Fn(&Store) -> T + Send + Sync + 'static,
{
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let reader = store.clone();
    store.subscribe(move || sink.lock().push(read(&reader)));
    log
}
