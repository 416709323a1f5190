//! # remit-bot entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use remit_cli::profile::{run_menu, run_profile, MenuArgs, ProfileArgs};
use remit_cli::serve::{run_serve, ServeArgs};

/// Remittance chat bot.
///
/// Bridges the Messenger platform to the remittance pricing API: webhook
/// server plus one-time page profile management.
#[derive(Parser, Debug)]
#[command(name = "remit-bot", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the webhook server.
    Serve(ServeArgs),

    /// Messenger page profile management (get-started button, menu install).
    Profile(ProfileArgs),

    /// Persistent menu operations.
    Menu(MenuArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(&args),
        Commands::Profile(args) => run_profile(&args),
        Commands::Menu(args) => run_menu(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
