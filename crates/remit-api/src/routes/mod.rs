//! HTTP route handlers.

pub mod notify;
pub mod webhook;
