//! Webhook delivery signature verification.
//!
//! The platform signs each delivery with `X-Hub-Signature:
//! sha1=<hex hmac of the raw body>`, keyed by the app secret. Verification
//! runs over the raw bytes before any JSON parsing. An absent header is
//! tolerated (the platform omits it for test deliveries) but logged; a
//! present header that does not match is rejected.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::AppError;

type HmacSha1 = Hmac<Sha1>;

/// Check `X-Hub-Signature` against the request body.
///
/// `signature` is the raw header value when present. Returns `Ok(())` for
/// a valid or absent signature, `Err(AppError::Forbidden)` otherwise.
pub fn verify(app_secret: &str, signature: Option<&str>, body: &[u8]) -> Result<(), AppError> {
    let Some(signature) = signature else {
        tracing::warn!("webhook delivery without X-Hub-Signature header");
        return Ok(());
    };

    let expected = compute(app_secret, body)?;
    if signature != expected {
        return Err(AppError::Forbidden(
            "X-Hub-Signature verification failed".to_string(),
        ));
    }
    Ok(())
}

fn compute(app_secret: &str, body: &[u8]) -> Result<String, AppError> {
    // HMAC accepts keys of any length, so this only fails on a broken build.
    let mut mac = HmacSha1::new_from_slice(app_secret.as_bytes())
        .map_err(|_| AppError::Internal("invalid HMAC key".to_string()))?;
    mac.update(body);
    Ok(format!("sha1={}", hex::encode(mac.finalize().into_bytes())))
}
