//! Quiz question endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::QuizConfig;
use crate::features::quiz::Question;
use crate::remote::error::RemoteError;

/// Supplies the question list once at startup.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Question>, RemoteError>;
}

/// `GET {endpoint}` returning a JSON array of questions.
pub struct HttpQuestionSource {
    client: Client,
    endpoint: String,
}

impl HttpQuestionSource {
    pub fn new(config: &QuizConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(RemoteError::Client)?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch(&self) -> Result<Vec<Question>, RemoteError> {
        let url = self.endpoint.clone();
        tracing::debug!(%url, "fetching questions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| RemoteError::Request {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(RemoteError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let questions: Vec<Question> = response
            .json()
            .await
            .map_err(|source| RemoteError::Decode { url, source })?;
        tracing::info!(count = questions.len(), "questions loaded");
        Ok(questions)
    }
}
