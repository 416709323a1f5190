//! Send API client.
//!
//! Posts [`MessageRequest`] bodies to `{graph_url}/me/messages` with the
//! page access token as a query parameter, which is how the platform
//! authenticates page-scoped calls. The client is `Send + Sync` and meant
//! to be shared via `Arc` across handlers.

use std::time::Duration;

use serde::Deserialize;

use crate::error::SendError;
use crate::template::{GenericElement, MessageRequest, QuickReply, SenderAction};

/// Default Graph API root, versioned the way the platform pins it.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com/v2.6";

/// Configuration for the Send API client.
#[derive(Debug, Clone)]
pub struct SendConfig {
    /// Graph API root. Overridable for tests and regional endpoints.
    pub graph_url: String,
    /// Page access token used on every call.
    pub page_token: String,
    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl SendConfig {
    /// Configuration against the default Graph API root.
    pub fn new(page_token: impl Into<String>) -> Self {
        Self {
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            page_token: page_token.into(),
            timeout_secs: 30,
        }
    }
}

/// Acknowledgement returned by the Send API on success.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendReceipt {
    #[serde(default)]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
}

/// HTTP client for the platform Send API.
#[derive(Debug)]
pub struct SendClient {
    client: reqwest::Client,
    graph_url: String,
    page_token: String,
}

impl SendClient {
    /// Build a client from configuration.
    pub fn new(config: SendConfig) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SendError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            graph_url: config.graph_url.trim_end_matches('/').to_string(),
            page_token: config.page_token,
        })
    }

    pub(crate) fn graph_url(&self) -> &str {
        &self.graph_url
    }

    /// POST a request body to a Graph API path and decode the response.
    pub(crate) async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, SendError> {
        let endpoint = format!("{}{}", self.graph_url, path);
        let resp = self
            .client
            .post(&endpoint)
            .query(&[("access_token", self.page_token.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| SendError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SendError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        resp.json().await.map_err(|e| SendError::Decode {
            endpoint,
            source: e,
        })
    }

    /// Deliver one message request.
    pub async fn send(&self, request: &MessageRequest) -> Result<SendReceipt, SendError> {
        let receipt: SendReceipt = self.post_json("/me/messages", request).await?;
        match &receipt.message_id {
            Some(mid) => tracing::debug!(message_id = %mid, "message delivered"),
            None => tracing::debug!("send API call accepted without message id"),
        }
        Ok(receipt)
    }

    /// Plain text message.
    pub async fn send_text(
        &self,
        recipient_id: &str,
        text: &str,
    ) -> Result<SendReceipt, SendError> {
        self.send(&MessageRequest::text(recipient_id, text)).await
    }

    /// Text message with quick-reply chips.
    pub async fn send_quick_replies(
        &self,
        recipient_id: &str,
        text: &str,
        replies: Vec<QuickReply>,
    ) -> Result<SendReceipt, SendError> {
        self.send(&MessageRequest::quick_replies(recipient_id, text, replies))
            .await
    }

    /// Generic template carousel.
    pub async fn send_generic(
        &self,
        recipient_id: &str,
        elements: Vec<GenericElement>,
    ) -> Result<SendReceipt, SendError> {
        self.send(&MessageRequest::generic(recipient_id, elements))
            .await
    }

    /// Tagged out-of-session notification card.
    pub async fn send_payment_update(
        &self,
        recipient_id: &str,
        element: GenericElement,
    ) -> Result<SendReceipt, SendError> {
        self.send(&MessageRequest::payment_update(recipient_id, element))
            .await
    }

    /// Typing indicator / read receipt.
    pub async fn sender_action(
        &self,
        recipient_id: &str,
        action: SenderAction,
    ) -> Result<SendReceipt, SendError> {
        self.send(&MessageRequest::action(recipient_id, action))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_versioned_graph_root() {
        let config = SendConfig::new("token");
        assert_eq!(config.graph_url, DEFAULT_GRAPH_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn graph_url_trailing_slash_is_trimmed() {
        let mut config = SendConfig::new("token");
        config.graph_url = "https://graph.example.com/v2.6/".to_string();
        let client = SendClient::new(config).unwrap();
        assert_eq!(client.graph_url(), "https://graph.example.com/v2.6");
    }

    #[test]
    fn receipt_tolerates_empty_body() {
        let receipt: SendReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.message_id.is_none());
        assert!(receipt.recipient_id.is_none());
    }
}
