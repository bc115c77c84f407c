//! # Lyricer App
//!
//! Console application layer: wiring and the main entry flow.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - The console presenter and `r`/`q` command reader
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core` and `infra`
//! - Wires the Spotify client and lyrics fetcher into the polling loop
//! - Song output goes to stdout, logs go to stderr

pub mod console;
pub mod context;
pub mod utils;

use std::sync::Arc;

use anyhow::Context as _;
use lyricer_core::PollSignal;
use tokio::io::BufReader;
use tokio::sync::mpsc;

pub use console::{parse_command, read_commands, render_song, ConsolePresenter};
pub use context::AppContext;

/// Capacity of the console → polling loop signal channel.
const SIGNAL_BUFFER: usize = 8;

/// Run Lyricer until the user quits.
///
/// Startup (config, browser consent, token exchange) is fatal on failure.
/// After that, provider errors are logged and retried by the polling loop.
///
/// # Errors
/// Returns an error if configuration, authorization or the token exchange
/// fails, or if the console cannot be read.
pub async fn run() -> anyhow::Result<()> {
    let context = AppContext::new().context("Error while reading the config file")?;

    context.authenticate().await.context("Could not authorize Spotify")?;

    let (signals, signal_rx) = mpsc::channel::<PollSignal>(SIGNAL_BUFFER);
    let polling = context.polling_loop(Arc::new(ConsolePresenter::stdout()));
    let polling_task = tokio::spawn(async move { polling.run(signal_rx).await });

    read_commands(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), signals)
        .await
        .context("Could not read console commands")?;

    let stats = polling_task.await.context("Polling loop panicked")?;
    tracing::info!(polls = stats.polls, failures = stats.failures, "Lyricer stopped");
    Ok(())
}
