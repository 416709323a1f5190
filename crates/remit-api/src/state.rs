//! Shared application state.

use std::sync::Arc;

use remit_core::NameResolver;
use remit_messenger::{SendClient, SendConfig};
use remit_pricing::{PricingClient, PricingConfig};

use crate::config::{ConfigError, ServiceConfig};

/// Shared state injected into every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub pricing: Arc<PricingClient>,
    pub messenger: Arc<SendClient>,
    pub resolver: Arc<NameResolver>,
}

impl AppState {
    /// Build state from configuration, constructing both HTTP clients and
    /// the built-in name catalog.
    pub fn from_config(config: ServiceConfig) -> Result<Self, ConfigError> {
        let pricing = PricingClient::new(PricingConfig::new(&config.pricing_url)).map_err(|e| {
            ConfigError::InvalidVar {
                var: "REMIT_PRICING_URL",
                message: e.to_string(),
            }
        })?;

        let mut send_config = SendConfig::new(config.page_token.clone());
        send_config.graph_url = config.graph_url.clone();
        let messenger = SendClient::new(send_config).map_err(|e| ConfigError::InvalidVar {
            var: "REMIT_PAGE_TOKEN",
            message: e.to_string(),
        })?;

        Ok(Self {
            config: Arc::new(config),
            pricing: Arc::new(pricing),
            messenger: Arc::new(messenger),
            resolver: Arc::new(NameResolver::builtin()),
        })
    }
}
