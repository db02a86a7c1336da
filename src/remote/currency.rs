//! Currency conversion over the Frankfurter rates API.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::CurrencyConfig;
use crate::money::Money;
use crate::remote::error::RemoteError;

/// Converts an amount between currencies.
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    async fn convert(&self, amount: Money, from: &str, to: &str) -> Result<Money, RemoteError>;
}

/// Three ASCII letters, upper-cased.
pub fn normalize_currency(code: &str) -> Result<String, RemoteError> {
    let code = code.trim();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(RemoteError::InvalidCurrency(code.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct LatestRates {
    rates: HashMap<String, f64>,
}

/// `GET {base_url}/latest?amount=A&from=F&to=T`, reading `rates[T]`.
pub struct FrankfurterClient {
    client: Client,
    base_url: String,
}

impl FrankfurterClient {
    pub fn new(config: &CurrencyConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(RemoteError::Client)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CurrencyConverter for FrankfurterClient {
    async fn convert(&self, amount: Money, from: &str, to: &str) -> Result<Money, RemoteError> {
        let from = normalize_currency(from)?;
        let to = normalize_currency(to)?;
        if from == to {
            return Ok(amount);
        }

        let url = format!(
            "{}/latest?amount={}&from={}&to={}",
            self.base_url, amount, from, to
        );
        tracing::debug!(%url, "requesting conversion rate");

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

        let body: LatestRates = response
            .json()
            .await
            .map_err(|source| RemoteError::Decode {
                url: url.clone(),
                source,
            })?;

        let converted = body
            .rates
            .get(&to)
            .copied()
            .and_then(Money::from_f64)
            .ok_or_else(|| RemoteError::MissingRate {
                url: url.clone(),
                currency: to.clone(),
            })?;

        tracing::info!(%amount, %from, %to, %converted, "converted deposit");
        Ok(converted)
    }
}
