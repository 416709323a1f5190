//! Outbound Send API wire types.
//!
//! These serialize to the platform's exact JSON shapes; optional fields
//! are skipped when absent so requests stay minimal. Constructors cover
//! the message kinds the bot actually sends.

use serde::{Deserialize, Serialize};

/// Message recipient, addressed by platform-scoped user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
}

/// Typing indicator / read receipt actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderAction {
    MarkSeen,
    TypingOn,
    TypingOff,
}

/// A quick-reply chip under a text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub content_type: String,
    pub title: String,
    pub payload: String,
}

impl QuickReply {
    /// Text quick reply with a developer-defined payload.
    pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            title: title.into(),
            payload: payload.into(),
        }
    }
}

/// Call-to-action button, on cards and in the persistent menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    /// Opens a URL, optionally inside the platform webview.
    WebUrl {
        title: String,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        messenger_extensions: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        webview_height_ratio: Option<String>,
    },
    /// Posts a developer-defined payload back to the webhook.
    Postback { title: String, payload: String },
}

impl Button {
    /// Plain web URL button.
    pub fn web_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::WebUrl {
            title: title.into(),
            url: url.into(),
            messenger_extensions: None,
            webview_height_ratio: None,
        }
    }

    /// Web URL button opened through the platform webview.
    pub fn webview(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::WebUrl {
            title: title.into(),
            url: url.into(),
            messenger_extensions: Some(true),
            webview_height_ratio: None,
        }
    }
}

/// One card in a generic template carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericElement {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub buttons: Vec<Button>,
}

/// Structured attachment payload, discriminated by `template_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template_type", rename_all = "snake_case")]
pub enum TemplatePayload {
    Generic { elements: Vec<GenericElement> },
    Button { text: String, buttons: Vec<Button> },
}

/// Message attachment. The bot only sends template attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: TemplatePayload,
}

impl Attachment {
    /// Template attachment wrapping the given payload.
    pub fn template(payload: TemplatePayload) -> Self {
        Self {
            kind: "template".to_string(),
            payload,
        }
    }
}

/// Message body: text or attachment, optionally with quick replies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReply>>,
}

/// Top-level Send API request body.
///
/// Exactly one of `message` and `sender_action` is populated by the
/// constructors; `messaging_type`/`tag` are only present on out-of-session
/// notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub recipient: Recipient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_action: Option<SenderAction>,
}

impl MessageRequest {
    fn to_recipient(recipient_id: impl Into<String>) -> Recipient {
        Recipient {
            id: recipient_id.into(),
        }
    }

    /// Plain text message.
    pub fn text(recipient_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient: Self::to_recipient(recipient_id),
            messaging_type: None,
            tag: None,
            message: Some(Message {
                text: Some(text.into()),
                ..Message::default()
            }),
            sender_action: None,
        }
    }

    /// Text message with quick-reply chips.
    pub fn quick_replies(
        recipient_id: impl Into<String>,
        text: impl Into<String>,
        replies: Vec<QuickReply>,
    ) -> Self {
        Self {
            recipient: Self::to_recipient(recipient_id),
            messaging_type: None,
            tag: None,
            message: Some(Message {
                text: Some(text.into()),
                quick_replies: Some(replies),
                ..Message::default()
            }),
            sender_action: None,
        }
    }

    /// Generic template carousel.
    pub fn generic(recipient_id: impl Into<String>, elements: Vec<GenericElement>) -> Self {
        Self {
            recipient: Self::to_recipient(recipient_id),
            messaging_type: None,
            tag: None,
            message: Some(Message {
                attachment: Some(Attachment::template(TemplatePayload::Generic { elements })),
                ..Message::default()
            }),
            sender_action: None,
        }
    }

    /// Out-of-session notification card, tagged `PAYMENT_UPDATE` so the
    /// platform accepts it outside the messaging window.
    pub fn payment_update(recipient_id: impl Into<String>, element: GenericElement) -> Self {
        Self {
            recipient: Self::to_recipient(recipient_id),
            messaging_type: Some("MESSAGE_TAG".to_string()),
            tag: Some("PAYMENT_UPDATE".to_string()),
            message: Some(Message {
                attachment: Some(Attachment::template(TemplatePayload::Generic {
                    elements: vec![element],
                })),
                ..Message::default()
            }),
            sender_action: None,
        }
    }

    /// Sender action (typing indicator, read receipt).
    pub fn action(recipient_id: impl Into<String>, action: SenderAction) -> Self {
        Self {
            recipient: Self::to_recipient(recipient_id),
            messaging_type: None,
            tag: None,
            message: None,
            sender_action: Some(action),
        }
    }
}
