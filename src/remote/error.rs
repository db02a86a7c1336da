use thiserror::Error;

/// Errors from the HTTP collaborators.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response from '{url}' has no rate for {currency}")]
    MissingRate { url: String, currency: String },

    #[error("Invalid currency code '{0}'")]
    InvalidCurrency(String),
}
