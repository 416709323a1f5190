//! # remit-messenger — Messaging Platform Client
//!
//! Everything that touches the chat platform's Graph API:
//!
//! - **Templates** (`template.rs`): outbound wire types for the Send API —
//!   text, quick replies, sender actions, generic templates, and the
//!   tagged out-of-session notification shape.
//!
//! - **Send client** (`send.rs`): posts message requests to
//!   `/me/messages`, with the page access token as a query parameter the
//!   way the platform expects.
//!
//! - **Profile** (`profile.rs`): get-started button and persistent menu
//!   management against `/me/messenger_profile` and `/me/thread_settings`.
//!
//! - **Events** (`event.rs`): incoming webhook payload types and the
//!   ordered event classification the webhook route dispatches on.
//!
//! This crate knows nothing about corridors or rates; it is the outbound
//! half of the bot's plumbing and is exercised by `remit-api`.

pub mod error;
pub mod event;
pub mod profile;
pub mod send;
pub mod template;

pub use error::SendError;
pub use event::{EventKind, MessagingEvent, WebhookPayload};
pub use send::{SendClient, SendConfig, SendReceipt};
pub use template::{
    Attachment, Button, GenericElement, Message, MessageRequest, QuickReply, Recipient,
    SenderAction, TemplatePayload,
};
