//! Local stand-in for the rates API (`/latest`) and the question endpoint
//! (`/questions`), with per-endpoint canned replies.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use slicebank::config::{CurrencyConfig, QuizConfig};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Latest,
    Questions,
}

/// One request the server saw.
#[derive(Debug, Clone)]
pub struct Hit {
    pub endpoint: Endpoint,
    pub query: Option<String>,
}

/// Canned reply for the next request to an endpoint.
#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: format!(r#"{{"message": "status {}"}}"#, status),
        }
    }

    /// `/latest` body carrying a single rate.
    pub fn rate(currency: &str, value: f64) -> Self {
        Self::ok(&format!(r#"{{"rates": {{"{}": {}}}}}"#, currency, value))
    }
}

#[derive(Clone, Default)]
struct Shared {
    hits: Arc<Mutex<Vec<Hit>>>,
    replies: Arc<Mutex<HashMap<Endpoint, VecDeque<Reply>>>>,
}

impl Shared {
    async fn answer(&self, endpoint: Endpoint, query: Option<String>) -> impl IntoResponse {
        self.hits.lock().await.push(Hit { endpoint, query });
        let reply = self
            .replies
            .lock()
            .await
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Reply::status(404));
        (
            StatusCode::from_u16(reply.status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            reply.body,
        )
    }
}

async fn latest(State(shared): State<Shared>, RawQuery(query): RawQuery) -> impl IntoResponse {
    shared.answer(Endpoint::Latest, query).await
}

async fn questions(State(shared): State<Shared>) -> impl IntoResponse {
    shared.answer(Endpoint::Questions, None).await
}

pub struct MockServer {
    addr: SocketAddr,
    shared: Shared,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Bind an ephemeral port and serve until dropped.
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new()
            .route("/latest", get(latest))
            .route("/questions", get(questions))
            .with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, shared, task }
    }

    pub async fn reply(&self, endpoint: Endpoint, reply: Reply) {
        self.shared
            .replies
            .lock()
            .await
            .entry(endpoint)
            .or_default()
            .push_back(reply);
    }

    pub async fn hits(&self) -> Vec<Hit> {
        self.shared.hits.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn currency_config(&self) -> CurrencyConfig {
        CurrencyConfig {
            base_url: self.base_url(),
            timeout_seconds: 5,
        }
    }

    pub fn quiz_config(&self) -> QuizConfig {
        QuizConfig {
            endpoint: format!("{}/questions", self.base_url()),
            timeout_seconds: 5,
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
