//! `remit-bot serve` — run the webhook server.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Args;

use remit_api::config::ServiceConfig;
use remit_api::state::AppState;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address, overriding `REMIT_BIND_ADDR`.
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

/// Run the webhook server until interrupted.
pub fn run_serve(args: &ServeArgs) -> anyhow::Result<u8> {
    let mut config = ServiceConfig::from_env().context("loading configuration")?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    let bind_addr = config.bind_addr;

    let state = AppState::from_config(config).context("building application state")?;
    let app = remit_api::app(state);

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(bind_addr)
            .await
            .with_context(|| format!("binding {bind_addr}"))?;
        tracing::info!(addr = %bind_addr, "webhook server listening");
        axum::serve(listener, app).await.context("serving HTTP")
    })?;

    Ok(0)
}
