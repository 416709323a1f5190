//! Pricing API client error types.

/// Errors from pricing API calls.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// HTTP transport error after retries were exhausted.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Pricing API returned a non-2xx status.
    #[error("pricing API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Client construction failed.
    #[error("pricing client configuration error: {0}")]
    Config(String),
}
