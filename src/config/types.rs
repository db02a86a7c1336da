use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub counter: CounterConfig,
}

/// Currency conversion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Rates API root (e.g., "https://api.frankfurter.app").
    #[serde(default = "default_currency_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Question endpoint for the quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// URL returning the JSON question array.
    #[serde(default = "default_quiz_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Date counter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Day the counter offsets from (default: 2027-06-21).
    #[serde(default = "default_base_date")]
    pub base_date: NaiveDate,
}

fn default_currency_base_url() -> String {
    "https://api.frankfurter.app".to_string()
}

fn default_quiz_endpoint() -> String {
    "http://localhost:8000/questions".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, 6, 21).unwrap_or_default()
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base_url: default_currency_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint: default_quiz_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            base_date: default_base_date(),
        }
    }
}
