//! # Torrent daemon controller using Transmission RPC.
//!
//! usage:
//!
//! ```rust,ignore
//! use tracker_sync_controller::{RpcConfig, TransmissionClient};
//! use tracker_sync_types::TorrentDaemon;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TransmissionClient::try_new(&RpcConfig::default()).await?;
//!     for torrent in client.list().await? {
//!         println!("{} {:?}", torrent.name, torrent.trackers);
//!     }
//!     client
//!         .add_trackers(1, vec!["udp://tracker.opentrackr.org:1337/announce".into()])
//!         .await?;
//!     Ok(())
//! }
//! ```
//!

mod client;
mod config;
mod conversions;
mod ops;
#[cfg(test)]
mod testutil;

pub use client::{RPC_VERSION, RPC_VERSION_MINIMUM, TransmissionClient};
pub use config::{DEFAULT_RPC_PATH, RpcConfig};
pub use transmission_rpc::SharableTransClient;

#[cfg(test)]
use axum as _;
#[cfg(test)]
use test_log as _;
#[cfg(test)]
use tracing_subscriber as _;
