//! # Tracker Sync
//!
//! Downloads a published master tracker list and adds every tracker a torrent is missing to all
//! torrents of a Transmission daemon.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tracker_sync::{NGOSANG_TRACKERS_ALL_CDN, Settings, UpdateErrorPolicy, run};
//! use tracker_sync_controller::RpcConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings {
//!         rpc: RpcConfig::default(),
//!         trackers_source: NGOSANG_TRACKERS_ALL_CDN.parse()?,
//!         on_update_error: UpdateErrorPolicy::Continue,
//!     };
//!     let report = run(&settings).await?;
//!     println!("{} torrents updated", report.updated);
//!     Ok(())
//! }
//! ```

pub mod reconcile;
pub mod trackers;

use dotenvy as _;
use thiserror::Error;
use tokio as _;
use tracing::{debug, info, instrument};
use tracing_subscriber as _;
use url::Url;

use tracker_sync_controller::{RpcConfig, TransmissionClient};
use tracker_sync_types::DaemonError;

pub use reconcile::{
    Outcome, SyncReport, UpdateErrorPolicy, add_missing_trackers, missing_trackers, sync_trackers,
};
pub use trackers::{NGOSANG_TRACKERS_ALL, NGOSANG_TRACKERS_ALL_CDN, fetch_trackers, parse_trackers};

#[cfg(test)]
use axum as _;
#[cfg(test)]
use serde_json as _;

/// Error variants for a tracker sync run.
#[derive(Error, Debug)]
pub enum Error {
    /// The tracker list could not be downloaded.
    #[error("failed to load trackers from {url}: {reason}")]
    TrackerSource {
        /// The tracker list URL.
        url: String,
        /// What went wrong.
        reason: String,
    },

    /// Connecting to, negotiating with or listing the daemon failed.
    #[error("transmission: {0}")]
    Daemon(#[from] DaemonError),

    /// Adding trackers to a single torrent failed.
    #[error("update torrent {id} \"{name}\" failed: {source}")]
    Update {
        /// Torrent id.
        id: i64,
        /// Torrent name.
        name: String,
        /// The daemon error.
        source: DaemonError,
    },

    /// Some torrents could not be updated while continuing past failures.
    #[error("{failed} torrent(s) could not be updated")]
    Incomplete {
        /// Number of torrents whose update failed.
        failed: usize,
    },
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How to reach the Transmission daemon.
    pub rpc: RpcConfig,
    /// Where to download the master tracker list from.
    pub trackers_source: Url,
    /// What to do when adding trackers to one torrent fails.
    pub on_update_error: UpdateErrorPolicy,
}

/// Runs one sync: fetch the tracker list, connect to the daemon, then reconcile every torrent.
///
/// Nothing on the daemon is touched unless the tracker list was loaded and the RPC version
/// negotiated successfully.
#[instrument(skip_all, fields(source = %settings.trackers_source))]
pub async fn run(settings: &Settings) -> Result<SyncReport, Error> {
    debug!("Settings: {settings:?}");
    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| trackers::source_error(&settings.trackers_source, e))?;
    let trackers = fetch_trackers(&http, &settings.trackers_source).await?;

    let client = TransmissionClient::try_new(&settings.rpc).await?;
    let report = sync_trackers(&client, &trackers, settings.on_update_error).await?;

    info!(
        "{} torrents: {} updated, {} already complete, {} failed, {} trackers added",
        report.torrents,
        report.updated,
        report.up_to_date,
        report.failed.len(),
        report.trackers_added
    );
    if !report.failed.is_empty() {
        return Err(Error::Incomplete {
            failed: report.failed.len(),
        });
    }
    Ok(report)
}
