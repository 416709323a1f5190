//! `remit-bot profile` and `remit-bot menu` — Messenger page setup.
//!
//! One-time operations run against the Graph API: registering the
//! get-started button, installing the persistent menu, and clearing the
//! menu from existing threads.

use anyhow::Context;
use clap::{Args, Subcommand};

use remit_api::config::ServiceConfig;
use remit_messenger::profile::PersistentMenu;
use remit_messenger::template::Button;
use remit_messenger::{SendClient, SendConfig};

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Register the get-started button and install the persistent menu.
    Setup,
}

/// Arguments for the `menu` subcommand.
#[derive(Args, Debug)]
pub struct MenuArgs {
    #[command(subcommand)]
    pub command: MenuCommand,
}

#[derive(Subcommand, Debug)]
pub enum MenuCommand {
    /// Clear the persistent menu from existing threads.
    Remove,
}

const GET_STARTED_PAYLOAD: &str = "GET_STARTED_PAYLOAD";

fn send_client(config: &ServiceConfig) -> anyhow::Result<SendClient> {
    let mut send_config = SendConfig::new(config.page_token.clone());
    send_config.graph_url = config.graph_url.clone();
    SendClient::new(send_config).context("building Graph API client")
}

/// Persistent menu installed by `profile setup`. Both entries deep-link
/// into the transaction web frontend through a tall webview.
fn default_menu(web_service_url: &str) -> PersistentMenu {
    let tall = |title: &str, path: &str| Button::WebUrl {
        title: title.to_string(),
        url: format!("{web_service_url}/{path}"),
        messenger_extensions: Some(false),
        webview_height_ratio: Some("tall".to_string()),
    };
    PersistentMenu::default_locale(vec![
        tall("Send someone money", "RequestRecipient_DataSender"),
        tall("Request money from someone", "RequestMoney_Calculator"),
    ])
}

/// Run `profile setup`.
pub fn run_profile(args: &ProfileArgs) -> anyhow::Result<u8> {
    let ProfileCommand::Setup = &args.command;
    let config = ServiceConfig::from_env().context("loading configuration")?;
    let client = send_client(&config)?;
    let menu = default_menu(&config.web_service_url);

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(async {
        client
            .set_get_started(GET_STARTED_PAYLOAD)
            .await
            .context("registering get-started button")?;
        client
            .set_persistent_menu(std::slice::from_ref(&menu))
            .await
            .context("installing persistent menu")?;
        anyhow::Ok(())
    })?;

    tracing::info!("messenger profile configured");
    Ok(0)
}

/// Run `menu remove`.
pub fn run_menu(args: &MenuArgs) -> anyhow::Result<u8> {
    let MenuCommand::Remove = &args.command;
    let config = ServiceConfig::from_env().context("loading configuration")?;
    let client = send_client(&config)?;

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(async {
        client
            .remove_persistent_menu()
            .await
            .context("removing persistent menu")?;
        anyhow::Ok(())
    })?;

    tracing::info!("persistent menu removed");
    Ok(0)
}
