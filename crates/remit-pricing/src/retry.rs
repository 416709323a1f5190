//! Bounded retry with exponential backoff for pricing API calls.
//!
//! Only transient transport failures (connection refused, timeouts) are
//! retried. A response that arrived — any status — is never retried here;
//! the caller inspects the status code. The policy is part of
//! [`crate::PricingConfig`] so tests can shrink the delays to zero.

use std::time::Duration;

/// Backoff policy for transport-level retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retry attempts after the initial request.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    /// Three retries at 200ms → 400ms → 800ms.
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries. Useful in tests that assert on the
    /// first response.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Send an HTTP request under `policy`, retrying transport errors.
///
/// The closure is invoked up to `policy.max_retries + 1` times.
pub(crate) async fn send_with_retry<F, Fut>(
    policy: RetryPolicy,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let mut last_err = None;
    for attempt in 0..=policy.max_retries {
        if attempt > 0 {
            let delay = policy.delay_for(attempt - 1);
            tracing::warn!(
                attempt,
                max_retries = policy.max_retries,
                "pricing API transport error, retrying in {delay:?}"
            );
            tokio::time::sleep(delay).await;
        }
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) => last_err = Some(e),
        }
    }
    // max_retries + 1 attempts all failed; the loop ran at least once.
    Err(last_err.expect("at least one attempt"))
}
