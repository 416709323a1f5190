//! Corridor listing client.
//!
//! Wraps a `reqwest::Client` with the pricing API base URL and the
//! request/response mapping for the corridor listing endpoint. The client
//! is `Send + Sync` and designed to be shared via `Arc` across handlers.

use std::time::Duration;

use remit_core::CorridorRecord;

use crate::error::PricingError;
use crate::retry::{send_with_retry, RetryPolicy};

/// Configuration for the pricing API client.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Base URL of the pricing API, e.g. `https://api.example.com`.
    /// A trailing slash is tolerated.
    pub base_url: String,
    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: u64,
    /// Transport-level retry policy.
    pub retry: RetryPolicy,
}

impl PricingConfig {
    /// Configuration with default timeout and retry policy.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
            retry: RetryPolicy::default(),
        }
    }
}

/// HTTP client for the remittance pricing API.
#[derive(Debug)]
pub struct PricingClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl PricingClient {
    /// Build a client from configuration.
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PricingError::Config(format!("failed to build HTTP client: {e}")))?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            retry: config.retry,
        })
    }

    /// Fetch the corridor listing for a source/destination country pair.
    ///
    /// Country codes are uppercased into the path, matching the API's
    /// route shape. Returns the unordered record sequence; aggregation
    /// and ordering are `remit-core`'s job.
    pub async fn corridors(
        &self,
        source_country: &str,
        dest_country: &str,
    ) -> Result<Vec<CorridorRecord>, PricingError> {
        let url = format!(
            "{}/api/v4/transfer/corridors/{}/{}",
            self.base_url,
            source_country.to_uppercase(),
            dest_country.to_uppercase()
        );
        tracing::debug!(%url, "fetching corridor listing");

        let resp = send_with_retry(self.retry, || self.client.get(&url).send())
            .await
            .map_err(|e| PricingError::Http {
                endpoint: url.clone(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PricingError::Api {
                endpoint: url,
                status: status.as_u16(),
                body,
            });
        }

        let records: Vec<CorridorRecord> =
            resp.json().await.map_err(|e| PricingError::Decode {
                endpoint: url.clone(),
                source: e,
            })?;
        tracing::debug!(count = records.len(), "corridor listing fetched");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PricingConfig::new("https://api.example.com/");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PricingClient::new(PricingConfig::new("https://api.example.com/")).unwrap();
        assert_eq!(client.base_url, "https://api.example.com");
    }
}
