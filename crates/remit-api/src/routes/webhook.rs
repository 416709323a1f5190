//! Messenger webhook endpoints.
//!
//! `GET /webhook` answers the platform's subscription handshake; `POST
//! /webhook` receives signed event batches. Signature verification runs
//! over the raw body before JSON parsing, so the handler takes `Bytes`
//! rather than an extractor-parsed payload.
//!
//! Event processing never fails the delivery: once the payload is
//! accepted, per-event errors are logged and the platform still gets a
//! 200, otherwise it would retry the whole batch.

use axum::body::Bytes;
use axum::extract::{Extension, Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use serde::Deserialize;

use remit_core::aggregate;
use remit_messenger::event::{MessagingEvent, WebhookPayload};
use remit_messenger::SenderAction;

use crate::commands::{self, Command};
use crate::error::AppError;
use crate::middleware::metrics::ApiMetrics;
use crate::render::payout_card;
use crate::signature;
use crate::state::AppState;

/// Query parameters of the subscription handshake.
#[derive(Debug, Deserialize)]
pub struct HandshakeParams {
    #[serde(rename = "hub.mode", default)]
    pub mode: String,
    #[serde(rename = "hub.verify_token", default)]
    pub verify_token: String,
    #[serde(rename = "hub.challenge", default)]
    pub challenge: String,
}

/// GET /webhook — subscription handshake.
pub async fn handshake(
    State(state): State<AppState>,
    Query(params): Query<HandshakeParams>,
) -> Result<String, AppError> {
    if params.mode == "subscribe" && params.verify_token == state.config.verify_token {
        tracing::info!("webhook subscription validated");
        Ok(params.challenge)
    } else {
        Err(AppError::Forbidden(
            "verify token mismatch".to_string(),
        ))
    }
}

/// POST /webhook — signed event delivery.
pub async fn receive(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let header = headers
        .get("x-hub-signature")
        .and_then(|v| v.to_str().ok());
    signature::verify(&state.config.app_secret, header, &body)?;

    let payload: WebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("malformed webhook payload: {e}")))?;

    if !payload.is_page() {
        tracing::debug!(object = %payload.object, "ignoring non-page webhook object");
        return Ok(axum::http::StatusCode::OK);
    }

    for entry in &payload.entry {
        for event in &entry.messaging {
            let kind = event.kind();
            metrics.record_webhook_event(kind_label(kind));
            if let Err(e) = dispatch(&state, event).await {
                tracing::error!(error = %e, sender = %event.sender.id, "event dispatch failed");
            }
        }
    }

    Ok(axum::http::StatusCode::OK)
}

fn kind_label(kind: remit_messenger::EventKind) -> &'static str {
    use remit_messenger::EventKind;
    match kind {
        EventKind::Optin => "optin",
        EventKind::Message => "message",
        EventKind::Delivery => "delivery",
        EventKind::Postback => "postback",
        EventKind::Read => "read",
        EventKind::AccountLinking => "account_linking",
        EventKind::Unknown => "unknown",
    }
}

async fn dispatch(state: &AppState, event: &MessagingEvent) -> Result<(), AppError> {
    use remit_messenger::EventKind;

    match event.kind() {
        EventKind::Message => handle_message(state, event).await,
        EventKind::Postback => handle_postback(state, event).await,
        EventKind::Optin => {
            tracing::info!(sender = %event.sender.id, "authentication optin received");
            Ok(())
        }
        EventKind::Delivery => {
            if let Some(delivery) = &event.delivery {
                tracing::debug!(
                    watermark = delivery.watermark,
                    mids = delivery.mids.len(),
                    "delivery confirmation"
                );
            }
            Ok(())
        }
        EventKind::Read => {
            if let Some(read) = &event.read {
                tracing::debug!(watermark = read.watermark, "message read");
            }
            Ok(())
        }
        EventKind::AccountLinking => {
            if let Some(linking) = &event.account_linking {
                tracing::info!(status = %linking.status, "account linking update");
            }
            Ok(())
        }
        EventKind::Unknown => {
            tracing::warn!(sender = %event.sender.id, "unknown messaging event");
            Ok(())
        }
    }
}

async fn handle_message(state: &AppState, event: &MessagingEvent) -> Result<(), AppError> {
    let Some(message) = &event.message else {
        return Ok(());
    };
    let sender = &event.sender.id;

    if message.is_echo {
        tracing::debug!(mid = %message.mid, "message echo");
        return Ok(());
    }
    if let Some(quick_reply) = &message.quick_reply {
        tracing::debug!(payload = %quick_reply.payload, "quick reply tapped");
    }

    if let Some(text) = &message.text {
        match commands::resolve(text) {
            Some(command) => run_command(state, sender, command).await?,
            None => {
                tracing::debug!(sender = %sender, "unrecognized text, no reply");
            }
        }
    } else if message.attachments.is_some() {
        state
            .messenger
            .send_text(sender, "Message with attachment received")
            .await?;
    }
    Ok(())
}

async fn handle_postback(state: &AppState, event: &MessagingEvent) -> Result<(), AppError> {
    let Some(postback) = &event.postback else {
        return Ok(());
    };
    let sender = &event.sender.id;
    tracing::info!(sender = %sender, payload = %postback.payload, "postback received");

    match commands::resolve(&postback.payload) {
        Some(command) => run_command(state, sender, command).await,
        None => {
            tracing::debug!(payload = %postback.payload, "unrecognized postback payload");
            Ok(())
        }
    }
}

async fn run_command(state: &AppState, sender: &str, command: Command) -> Result<(), AppError> {
    match command {
        Command::TodayRate => {
            state
                .messenger
                .send_quick_replies(
                    sender,
                    commands::rate_prompt_text(),
                    commands::rate_prompt_replies(),
                )
                .await?;
            Ok(())
        }
        Command::Corridor(query) => send_corridor_rates(state, sender, &query).await,
    }
}

/// Fetch, aggregate, and send the rate carousel for one corridor.
async fn send_corridor_rates(
    state: &AppState,
    sender: &str,
    query: &remit_core::RateQuery,
) -> Result<(), AppError> {
    state
        .messenger
        .sender_action(sender, SenderAction::TypingOn)
        .await?;

    let records = state
        .pricing
        .corridors(&query.source_country, &query.dest_country)
        .await?;

    let summaries = aggregate(&records, query, state.resolver.as_ref())
        .map_err(|e| AppError::Upstream(format!("corridor data rejected: {e}")))?;

    if summaries.is_empty() {
        let text = if query.dest_currency.is_empty() {
            format!("No payout options found for {}", query.dest_country)
        } else {
            format!(
                "No payout options found for {} in {}",
                query.dest_country, query.dest_currency
            )
        };
        state.messenger.send_text(sender, &text).await?;
        return Ok(());
    }

    let cards = summaries
        .iter()
        .map(|s| {
            payout_card(
                s,
                query,
                &state.config.server_url,
                &state.config.web_service_url,
            )
        })
        .collect();
    state.messenger.send_generic(sender, cards).await?;
    Ok(())
}
