//! Lyricer - lyrics for whatever Spotify is playing
//!
//! Main entry point for the console application.

use lyricer_app::utils::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    logging::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    lyricer_app::run().await
}
