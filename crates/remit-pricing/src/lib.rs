//! # remit-pricing — Pricing API Client
//!
//! Typed reqwest client for the remittance pricing API. One operation
//! matters to the bot: the corridor listing for a source/destination
//! country pair, returned as the unordered record sequence that
//! `remit-core` aggregates.
//!
//! ## Error Handling
//!
//! HTTP failures map to [`PricingError`] with diagnostic context (endpoint
//! URL, status, body excerpt). Transport errors are retried with
//! exponential backoff via the `retry` module; non-2xx responses and
//! decode failures are returned immediately.

pub mod client;
pub mod error;
mod retry;

pub use client::{PricingClient, PricingConfig};
pub use error::PricingError;
pub use retry::RetryPolicy;
