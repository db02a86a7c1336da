//! TOML configuration for the HTTP collaborators and the counter.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, CounterConfig, CurrencyConfig, QuizConfig};
