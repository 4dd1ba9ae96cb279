//! # Tracker Sync
//!
//! ## Usage
//!
//! ```sh,ignore
//! cargo run --release -p tracker-sync -- --host 127.0.0.1 --username rpcuser --password rpcpass
//! ```

mod cli;

use clap::Parser;
use reqwest as _;
use thiserror as _;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracker_sync_types as _;

#[cfg(test)]
use axum as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use test_log as _;

/// Initializes the tracing subscriber. `RUST_LOG` takes precedence over `--debug`.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    init_tracing(cli.debug);

    let settings = tracker_sync::Settings::from(cli);
    if let Err(e) = tracker_sync::run(&settings).await {
        error!("{e}");
        return Err(e.into());
    }

    Ok(())
}
