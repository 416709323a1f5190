//! Graph API client error types.

/// Errors from Send API / profile calls.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Graph API returned a non-2xx status.
    #[error("graph API {endpoint} returned {status}: {body}")]
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
    #[error("send client configuration error: {0}")]
    Config(String),
}
