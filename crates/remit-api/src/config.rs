//! Service configuration loaded from the environment.
//!
//! Every deployment-specific value comes in through `REMIT_*` variables;
//! nothing is read from disk. Secrets (app secret, page token) are
//! mandatory, the rest carry defaults suitable for local runs.

use std::net::SocketAddr;

use remit_messenger::send::DEFAULT_GRAPH_URL;

/// Configuration error raised during [`ServiceConfig::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },
}

/// Immutable service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// App secret used to verify `X-Hub-Signature` on webhook deliveries.
    pub app_secret: String,
    /// Token echoed back during the `GET /webhook` subscription handshake.
    pub verify_token: String,
    /// Page access token for outbound Send API calls.
    pub page_token: String,
    /// Public base URL of this service; card images resolve under
    /// `{server_url}/assets/`.
    pub server_url: String,
    /// Pricing API base URL.
    pub pricing_url: String,
    /// Transaction web frontend; card buttons deep-link into it.
    pub web_service_url: String,
    /// Graph API root. Overridable for tests and regional endpoints.
    pub graph_url: String,
    /// Listen address for the HTTP server.
    pub bind_addr: SocketAddr,
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(var)),
    }
}

fn optional(var: &'static str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl ServiceConfig {
    /// Load configuration from `REMIT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = optional("REMIT_BIND_ADDR", "0.0.0.0:5000");
        let bind_addr = bind.parse().map_err(|e| ConfigError::InvalidVar {
            var: "REMIT_BIND_ADDR",
            message: format!("{e}"),
        })?;

        Ok(Self {
            app_secret: required("REMIT_APP_SECRET")?,
            verify_token: required("REMIT_VERIFY_TOKEN")?,
            page_token: required("REMIT_PAGE_TOKEN")?,
            server_url: trim_slash(&required("REMIT_SERVER_URL")?),
            pricing_url: trim_slash(&required("REMIT_PRICING_URL")?),
            web_service_url: trim_slash(&required("REMIT_WEB_SERVICE_URL")?),
            graph_url: trim_slash(&optional("REMIT_GRAPH_URL", DEFAULT_GRAPH_URL)),
            bind_addr,
        })
    }
}

fn trim_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
