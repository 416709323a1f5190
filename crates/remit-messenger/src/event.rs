//! Incoming webhook payload types.
//!
//! The platform delivers batched events: one [`WebhookPayload`] carries
//! any number of page entries, each with any number of messaging events.
//! Unknown fields are ignored so payload-format additions on the platform
//! side never break deserialization.

use serde::{Deserialize, Serialize};

/// Top-level webhook POST body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WebhookPayload {
    /// `"page"` for page subscriptions.
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

impl WebhookPayload {
    /// Whether this payload came from a page subscription.
    pub fn is_page(&self) -> bool {
        self.object == "page"
    }
}

/// One page's batch of messaging events.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub time: u64,
    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

/// Sender or recipient of a messaging event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Endpoint {
    #[serde(default)]
    pub id: String,
}

/// A single messaging event. At most one of the optional payload fields
/// is populated per event; [`MessagingEvent::kind`] picks it out.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MessagingEvent {
    #[serde(default)]
    pub sender: Endpoint,
    #[serde(default)]
    pub recipient: Endpoint,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optin: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<IncomingMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postback: Option<Postback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<Read>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_linking: Option<AccountLinking>,
}

/// Inbound message content.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub mid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub is_echo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReplyPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// Payload echoed back when the user taps a quick-reply chip.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuickReplyPayload {
    #[serde(default)]
    pub payload: String,
}

/// Delivery confirmation for previously sent messages.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Delivery {
    #[serde(default)]
    pub mids: Vec<String>,
    #[serde(default)]
    pub watermark: u64,
}

/// Postback from a button tap.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Postback {
    #[serde(default)]
    pub payload: String,
}

/// Read receipt.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Read {
    #[serde(default)]
    pub watermark: u64,
}

/// Account linking status change.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccountLinking {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
}

/// Classified view of a [`MessagingEvent`].
///
/// Classification is ordered: when an event somehow carries more than one
/// payload field, the first match in declaration order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Optin,
    Message,
    Delivery,
    Postback,
    Read,
    AccountLinking,
    Unknown,
}

impl MessagingEvent {
    /// Classify this event for dispatch.
    pub fn kind(&self) -> EventKind {
        if self.optin.is_some() {
            EventKind::Optin
        } else if self.message.is_some() {
            EventKind::Message
        } else if self.delivery.is_some() {
            EventKind::Delivery
        } else if self.postback.is_some() {
            EventKind::Postback
        } else if self.read.is_some() {
            EventKind::Read
        } else if self.account_linking.is_some() {
            EventKind::AccountLinking
        } else {
            EventKind::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_text_message_event() {
        let payload: WebhookPayload = serde_json::from_value(serde_json::json!({
            "object": "page",
            "entry": [{
                "id": "1029384756",
                "time": 1_489_000_000_000u64,
                "messaging": [{
                    "sender": { "id": "42" },
                    "recipient": { "id": "1029384756" },
                    "timestamp": 1_489_000_000_123u64,
                    "message": { "mid": "mid.abc", "text": "today rate", "seq": 7 }
                }]
            }]
        }))
        .unwrap();

        assert!(payload.is_page());
        let event = &payload.entry[0].messaging[0];
        assert_eq!(event.kind(), EventKind::Message);
        let message = event.message.as_ref().unwrap();
        assert_eq!(message.text.as_deref(), Some("today rate"));
        assert!(!message.is_echo);
    }

    #[test]
    fn quick_reply_payload_is_exposed() {
        let event: MessagingEvent = serde_json::from_value(serde_json::json!({
            "sender": { "id": "42" },
            "recipient": { "id": "7" },
            "message": {
                "mid": "mid.qr",
                "text": "PHL",
                "quick_reply": { "payload": "RATE_HKG_PHL" }
            }
        }))
        .unwrap();

        let message = event.message.unwrap();
        assert_eq!(message.quick_reply.unwrap().payload, "RATE_HKG_PHL");
    }

    #[test]
    fn classification_follows_declaration_order() {
        let mut event = MessagingEvent::default();
        assert_eq!(event.kind(), EventKind::Unknown);

        event.read = Some(Read { watermark: 5 });
        assert_eq!(event.kind(), EventKind::Read);

        event.postback = Some(Postback {
            payload: "GET_STARTED".to_string(),
        });
        assert_eq!(event.kind(), EventKind::Postback);

        event.message = Some(IncomingMessage::default());
        assert_eq!(event.kind(), EventKind::Message);

        event.optin = Some(serde_json::json!({ "ref": "PASS_THREAD" }));
        assert_eq!(event.kind(), EventKind::Optin);
    }

    #[test]
    fn delivery_and_account_linking_events() {
        let delivery: MessagingEvent = serde_json::from_value(serde_json::json!({
            "sender": { "id": "42" },
            "recipient": { "id": "7" },
            "delivery": { "mids": ["mid.1", "mid.2"], "watermark": 1_489_000_000u64 }
        }))
        .unwrap();
        assert_eq!(delivery.kind(), EventKind::Delivery);
        assert_eq!(delivery.delivery.unwrap().mids.len(), 2);

        let linking: MessagingEvent = serde_json::from_value(serde_json::json!({
            "sender": { "id": "42" },
            "recipient": { "id": "7" },
            "account_linking": { "status": "linked", "authorization_code": "xyz" }
        }))
        .unwrap();
        assert_eq!(linking.kind(), EventKind::AccountLinking);
    }

    #[test]
    fn echo_messages_are_flagged() {
        let event: MessagingEvent = serde_json::from_value(serde_json::json!({
            "sender": { "id": "7" },
            "recipient": { "id": "42" },
            "message": { "mid": "mid.echo", "is_echo": true, "app_id": 123, "text": "hi" }
        }))
        .unwrap();
        assert!(event.message.unwrap().is_echo);
    }

    #[test]
    fn unknown_payload_fields_are_ignored() {
        let payload: Result<WebhookPayload, _> = serde_json::from_value(serde_json::json!({
            "object": "page",
            "entry": [{
                "id": "1",
                "time": 0,
                "messaging": [{
                    "sender": { "id": "42", "community": {} },
                    "recipient": { "id": "7" },
                    "reaction": { "action": "react" }
                }]
            }]
        }));
        let payload = payload.unwrap();
        assert_eq!(payload.entry[0].messaging[0].kind(), EventKind::Unknown);
    }
}
