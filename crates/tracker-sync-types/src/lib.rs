//! # Tracker Sync Types
//!
//! This crate defines the common types and the daemon trait used to keep the tracker lists of a
//! torrent daemon in sync with a published master list.

use std::collections::HashSet;

use thiserror::Error;

/// Error type for torrent daemon operations.
#[derive(Error, Debug)]
pub enum DaemonError {
    /// Transport errors: the daemon could not be reached or its response could not be read.
    /// A daemon rejecting the credentials ends up here too.
    #[error("network error: {0}")]
    Network(String),

    /// Server returned an error response
    #[error("server error: {0}")]
    ServerError(String),

    /// The daemon speaks an RPC version range this client does not support.
    #[error(
        "remote RPC version (v{remote}) is incompatible with this client (v{client}, needs at least v{client_minimum}): remote needs at least v{remote_minimum}"
    )]
    IncompatibleRpcVersion {
        /// Version reported by the daemon.
        remote: i64,
        /// Oldest version the daemon still accepts.
        remote_minimum: i64,
        /// Version spoken by this client.
        client: i64,
        /// Oldest daemon version this client can talk to.
        client_minimum: i64,
    },

    /// The connection settings cannot be turned into a usable endpoint.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Other unexpected errors
    #[error("unexpected error: {0}")]
    Other(String),
}

/// RPC version information reported by the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcVersion {
    /// Current RPC version of the daemon.
    pub version: i64,
    /// Oldest RPC version the daemon still supports.
    pub minimum: i64,
    /// Human readable daemon release, e.g. `4.0.5 (a6fe2a64aa)`.
    pub daemon_version: String,
}

/// A torrent as seen by the daemon, reduced to what tracker sync needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Torrent {
    /// Daemon-local torrent id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Announce URLs of the trackers currently attached to the torrent.
    pub trackers: Vec<String>,
}

impl Torrent {
    /// Returns the announce URLs as a set for membership checks.
    pub fn announce_set(&self) -> HashSet<&str> {
        self.trackers.iter().map(String::as_str).collect()
    }
}

/// TorrentDaemon defines the interface tracker sync needs from a torrent daemon.
#[allow(async_fn_in_trait)]
pub trait TorrentDaemon {
    /// Query the RPC version range of the daemon.
    async fn rpc_version(&self) -> Result<RpcVersion, DaemonError>;
    /// List all torrents with their id, name and trackers.
    async fn list(&self) -> Result<Vec<Torrent>, DaemonError>;
    /// Add the given announce URLs to the torrent with the given id.
    async fn add_trackers(&self, id: i64, trackers: Vec<String>) -> Result<(), DaemonError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announce_set_matches_exact_urls() {
        let torrent = Torrent {
            id: 1,
            name: "debian".to_string(),
            trackers: vec![
                "udp://tracker.example:80/announce".to_string(),
                "udp://tracker.example:80/announce".to_string(),
                "http://other.example/announce".to_string(),
            ],
        };

        let set = torrent.announce_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("udp://tracker.example:80/announce"));
        // no normalisation of case or trailing slashes
        assert!(!set.contains("UDP://tracker.example:80/announce"));
        assert!(!set.contains("http://other.example/announce/"));
    }

    #[test]
    fn incompatible_version_message_names_both_sides() {
        let err = DaemonError::IncompatibleRpcVersion {
            remote: 9,
            remote_minimum: 1,
            client: 17,
            client_minimum: 14,
        };
        let msg = err.to_string();
        assert!(msg.contains("v9"));
        assert!(msg.contains("at least v14"));
        assert!(msg.contains("v17"));
    }
}
