//! Messenger profile management.
//!
//! One-time page setup: the get-started button and the persistent menu.
//! Menu removal goes through the legacy thread-settings reset, which is
//! the call the platform honors for clearing existing threads.

use serde::{Deserialize, Serialize};

use crate::error::SendError;
use crate::send::SendClient;
use crate::template::Button;

/// One locale's persistent menu definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentMenu {
    pub locale: String,
    pub composer_input_disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messenger_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webview_share_button: Option<bool>,
    pub call_to_actions: Vec<Button>,
}

impl PersistentMenu {
    /// Default-locale menu with composer input left enabled.
    pub fn default_locale(call_to_actions: Vec<Button>) -> Self {
        Self {
            locale: "default".to_string(),
            composer_input_disabled: false,
            messenger_extensions: Some(true),
            webview_share_button: Some(false),
            call_to_actions,
        }
    }
}

/// Acknowledgement body from profile calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileResult {
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Serialize)]
struct GetStartedRequest<'a> {
    get_started: GetStartedPayload<'a>,
}

#[derive(Serialize)]
struct GetStartedPayload<'a> {
    payload: &'a str,
}

#[derive(Serialize)]
struct PersistentMenuRequest<'a> {
    persistent_menu: &'a [PersistentMenu],
}

#[derive(Serialize)]
struct ThreadSettingsReset {
    setting_type: &'static str,
    thread_state: &'static str,
    call_to_actions: &'static [Button],
}

impl SendClient {
    /// Register the get-started button with a developer-defined payload.
    pub async fn set_get_started(&self, payload: &str) -> Result<ProfileResult, SendError> {
        tracing::info!("registering get-started button");
        self.post_json(
            "/me/messenger_profile",
            &GetStartedRequest {
                get_started: GetStartedPayload { payload },
            },
        )
        .await
    }

    /// Install the persistent menu for all listed locales.
    pub async fn set_persistent_menu(
        &self,
        menus: &[PersistentMenu],
    ) -> Result<ProfileResult, SendError> {
        tracing::info!(locales = menus.len(), "installing persistent menu");
        self.post_json(
            "/me/messenger_profile",
            &PersistentMenuRequest {
                persistent_menu: menus,
            },
        )
        .await
    }

    /// Clear the persistent menu from existing threads.
    pub async fn remove_persistent_menu(&self) -> Result<ProfileResult, SendError> {
        tracing::info!("removing persistent menu");
        self.post_json(
            "/me/thread_settings",
            &ThreadSettingsReset {
                setting_type: "call_to_actions",
                thread_state: "existing_thread",
                call_to_actions: &[],
            },
        )
        .await
    }
}
