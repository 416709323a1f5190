//! Core notification relay.
//!
//! `POST /notify` lets the remittance core push user-facing updates
//! through the bot. Dispatch is ordered: a transfer id forces the
//! transaction-status template and a transfer-request reference forces
//! the recipient-data template regardless of the declared `type`; only
//! then does the `type` field pick the message shape. All outbound cards
//! carry the out-of-session tag so they are deliverable after the
//! messaging window closes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use remit_messenger::{Button, GenericElement};

use crate::error::AppError;
use crate::state::AppState;

/// Notification request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub messenger_id: String,
    #[serde(default)]
    pub transfer: Option<TransferRef>,
    #[serde(default)]
    pub transfer_request: Option<TransferRequestRef>,
}

/// Reference to an existing transfer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferRef {
    #[serde(default)]
    pub id: String,
}

/// Reference to a pending transfer request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferRequestRef {
    #[serde(default)]
    pub reference: String,
}

/// POST /notify.
pub async fn notify(
    State(state): State<AppState>,
    Json(notification): Json<Notification>,
) -> Result<StatusCode, AppError> {
    let recipient = notification.messenger_id.clone();
    if recipient.is_empty() {
        // The core fires notifications for every user; ones without a
        // linked messenger id are simply not deliverable here.
        tracing::info!("notification without messenger id, skipping");
        return Ok(StatusCode::OK);
    }

    let transfer_id = notification
        .transfer
        .as_ref()
        .map(|t| t.id.as_str())
        .unwrap_or_default();
    let request_reference = notification
        .transfer_request
        .as_ref()
        .map(|t| t.reference.as_str())
        .unwrap_or_default();

    if !transfer_id.is_empty() {
        send_transaction_status(&state, &recipient, &notification, transfer_id).await?;
    } else if !request_reference.is_empty() {
        send_recipient_data(&state, &recipient, &notification, request_reference).await?;
    } else {
        match notification.r#type.as_str() {
            "transaction_status_updated" => {
                send_transaction_status(&state, &recipient, &notification, transfer_id).await?
            }
            "rate_change" => send_rate_change(&state, &recipient, &notification).await?,
            "recipient_information_created" => {
                send_recipient_data(&state, &recipient, &notification, request_reference).await?
            }
            "customer-centric" => {
                let text = join_title_message(&notification, " ");
                state.messenger.send_text(&recipient, &text).await?;
            }
            other => {
                tracing::debug!(kind = %other, "notification with default text shape");
                let text = join_title_message(&notification, "\n");
                state.messenger.send_text(&recipient, &text).await?;
            }
        }
    }

    Ok(StatusCode::OK)
}

fn join_title_message(notification: &Notification, separator: &str) -> String {
    if notification.title.is_empty() {
        format!("{}{}", notification.title, notification.message)
    } else {
        format!(
            "{}{}{}",
            notification.title, separator, notification.message
        )
    }
}

async fn send_transaction_status(
    state: &AppState,
    recipient: &str,
    notification: &Notification,
    transfer_id: &str,
) -> Result<(), AppError> {
    let card = GenericElement {
        title: notification.title.clone(),
        subtitle: notification.message.clone(),
        item_url: Some(state.config.web_service_url.clone()),
        image_url: Some(format!(
            "{}/assets/transactionDetail.png",
            state.config.server_url
        )),
        buttons: vec![Button::webview(
            "DETAIL",
            format!(
                "{}/Transaction?id={}",
                state.config.web_service_url, transfer_id
            ),
        )],
    };
    state.messenger.send_payment_update(recipient, card).await?;
    Ok(())
}

async fn send_recipient_data(
    state: &AppState,
    recipient: &str,
    notification: &Notification,
    reference: &str,
) -> Result<(), AppError> {
    let card = GenericElement {
        title: notification.title.clone(),
        subtitle: notification.message.clone(),
        item_url: Some(state.config.web_service_url.clone()),
        image_url: Some(format!("{}/assets/oneMoreStep.png", state.config.server_url)),
        buttons: vec![Button::webview(
            "Submit",
            format!(
                "{}/SendMoney_Confirm_Prompt?reference={}",
                state.config.web_service_url, reference
            ),
        )],
    };
    state.messenger.send_payment_update(recipient, card).await?;
    Ok(())
}

async fn send_rate_change(
    state: &AppState,
    recipient: &str,
    notification: &Notification,
) -> Result<(), AppError> {
    let card = GenericElement {
        title: notification.title.clone(),
        subtitle: notification.message.clone(),
        item_url: Some(state.config.web_service_url.clone()),
        image_url: Some(format!("{}/assets/rateChanged.png", state.config.server_url)),
        buttons: vec![
            Button::web_url("Submit Again", state.config.web_service_url.clone()),
            Button::web_url(
                "Create a New Transaction",
                state.config.web_service_url.clone(),
            ),
        ],
    };
    state.messenger.send_payment_update(recipient, card).await?;
    Ok(())
}
