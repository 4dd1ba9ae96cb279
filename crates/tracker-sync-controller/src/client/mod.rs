//! Transmission RPC client implementation.

use std::fmt::Display;

use tracing::{debug, info};
use transmission_rpc::{
    SharableTransClient,
    types::{Id, TorrentGetField, TorrentSetArgs},
};

use tracker_sync_types::{DaemonError, RpcVersion, Torrent, TorrentDaemon};

use crate::config::RpcConfig;
use crate::conversions::{TransmissionSessionWrapper, TransmissionTorrentWrapper};
use crate::ops::TransmissionOps;


/// RPC version spoken by this client.
///
/// Trackers are added with `trackerAdd`, which v17 deprecates in favour of `trackerList` but
/// every v17 daemon still accepts.
pub const RPC_VERSION: i64 = 17;
/// Oldest daemon RPC version this client can talk to.
pub const RPC_VERSION_MINIMUM: i64 = 14;

/// TransmissionClient is a [`TorrentDaemon`] that uses Transmission RPC.
#[allow(missing_debug_implementations, private_bounds)]
pub struct TransmissionClient<T: TransmissionOps = SharableTransClient> {
    client: T,
}

impl TransmissionClient {
    /// Create a new TransmissionClient.
    ///
    /// This method is async as the RPC version is negotiated on creation: the daemon must report
    /// a version range overlapping `RPC_VERSION_MINIMUM..=RPC_VERSION`.
    pub async fn try_new(config: &RpcConfig) -> Result<Self, DaemonError> {
        let url = config.rpc_url()?;

        debug!("Connecting to Transmission RPC at {}", url);
        let client = match config.authentication() {
            Some(auth) => SharableTransClient::with_auth(url, auth),
            None => SharableTransClient::new(url),
        };
        let client = Self { client };
        client.negotiate().await?;

        debug!("Connected to Transmission Daemon");
        Ok(client)
    }
}

#[allow(private_bounds)]
impl<T: TransmissionOps> TransmissionClient<T> {
    /// Create a TransmissionClient with a custom client implementation.
    /// This is primarily useful for testing with mocks.
    #[cfg(test)]
    pub(crate) fn with_client(client: T) -> Self {
        Self { client }
    }

    /// Queries the daemon RPC version and fails unless it is compatible with this client.
    pub async fn negotiate(&self) -> Result<RpcVersion, DaemonError> {
        let remote = self.rpc_version().await?;
        check_compatible(&remote)?;
        info!(
            "remote transmission RPC version (v{}), daemon {}",
            remote.version, remote.daemon_version
        );
        Ok(remote)
    }
}

#[allow(private_bounds)]
impl<T: TransmissionOps> TorrentDaemon for TransmissionClient<T> {
    async fn rpc_version(&self) -> Result<RpcVersion, DaemonError> {
        debug!("Getting RPC version");
        let response = self.client.session_get().await.map_err(map_client_error)?;
        if !response.is_ok() {
            return Err(DaemonError::ServerError(response.result));
        }

        Ok(TransmissionSessionWrapper(response.arguments).into())
    }

    async fn list(&self) -> Result<Vec<Torrent>, DaemonError> {
        debug!("Listing torrents");
        let fields = vec![
            TorrentGetField::Id,
            TorrentGetField::Name,
            TorrentGetField::Trackers,
        ];
        let response = self
            .client
            .torrent_get(fields)
            .await
            .map_err(map_client_error)?;
        if !response.is_ok() {
            return Err(DaemonError::ServerError(response.result));
        }

        let torrents = response
            .arguments
            .torrents
            .into_iter()
            .map(|t| Torrent::try_from(TransmissionTorrentWrapper(t)))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Torrents: {torrents:?}");

        Ok(torrents)
    }

    async fn add_trackers(&self, id: i64, trackers: Vec<String>) -> Result<(), DaemonError> {
        debug!("Adding trackers to torrent ID {id}: {trackers:?}");
        let args = TorrentSetArgs {
            tracker_add: Some(trackers),
            ..Default::default()
        };
        let response = self
            .client
            .torrent_set(args, vec![Id::Id(id)])
            .await
            .map_err(map_client_error)?;
        if !response.is_ok() {
            return Err(DaemonError::ServerError(response.result));
        }
        debug!("Tracker update sent");
        Ok(())
    }
}

/// Fails with [`DaemonError::IncompatibleRpcVersion`] when the version ranges do not overlap.
fn check_compatible(remote: &RpcVersion) -> Result<(), DaemonError> {
    if remote.minimum <= RPC_VERSION && remote.version >= RPC_VERSION_MINIMUM {
        return Ok(());
    }
    Err(DaemonError::IncompatibleRpcVersion {
        remote: remote.version,
        remote_minimum: remote.minimum,
        client: RPC_VERSION,
        client_minimum: RPC_VERSION_MINIMUM,
    })
}

/// Maps transmission client errors to daemon errors.
///
/// transmission_rpc reports connection and decoding failures through one boxed error. RPC-level
/// failures arrive as a non-success `result` instead.
fn map_client_error(err: impl Display) -> DaemonError {
    DaemonError::Network(err.to_string())
}
