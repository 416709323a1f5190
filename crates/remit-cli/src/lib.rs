//! # remit-cli — `remit-bot` binary
//!
//! Subcommand handlers for the bot's operational surface: running the
//! webhook server and one-time Messenger page setup. Handlers are
//! synchronous entry points that spin up a Tokio runtime internally, so
//! `main` stays a plain `fn` and exit codes flow through `ExitCode`.

pub mod profile;
pub mod serve;
