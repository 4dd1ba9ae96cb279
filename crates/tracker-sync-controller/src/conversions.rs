//! Type conversion wrappers between transmission_rpc types and tracker_sync_types.
//!
//! This module provides newtype wrappers to work around Rust's orphan rules,
//! allowing conversions between external types.

use transmission_rpc::types::{SessionGet, Torrent as TransmissionTorrent};

use tracker_sync_types::{DaemonError, RpcVersion, Torrent};

/// Wrapper for converting `transmission_rpc::types::SessionGet` to `RpcVersion`.
#[derive(Debug)]
pub(crate) struct TransmissionSessionWrapper(pub(crate) SessionGet);

/// Wrapper for converting `transmission_rpc::types::Torrent` to `Torrent`.
#[derive(Debug)]
pub(crate) struct TransmissionTorrentWrapper(pub(crate) TransmissionTorrent);

impl From<TransmissionSessionWrapper> for RpcVersion {
    fn from(wrapper: TransmissionSessionWrapper) -> Self {
        let value = wrapper.0;
        Self {
            version: i64::from(value.rpc_version),
            minimum: i64::from(value.rpc_version_minimum),
            daemon_version: value.version,
        }
    }
}

/// Every field is optional on the wire; a torrent without an id cannot be updated.
impl TryFrom<TransmissionTorrentWrapper> for Torrent {
    type Error = DaemonError;

    fn try_from(wrapper: TransmissionTorrentWrapper) -> Result<Self, Self::Error> {
        let value = wrapper.0;
        let id = value
            .id
            .ok_or_else(|| DaemonError::Other("torrent-get returned a torrent without id".into()))?;
        Ok(Self {
            id,
            name: value.name.unwrap_or_default(),
            trackers: value
                .trackers
                .unwrap_or_default()
                .into_iter()
                .map(|t| t.announce)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{make_test_session, make_test_torrent, torrent_from_json};

    #[test]
    fn torrent_keeps_announce_urls_in_order() {
        let torrent = Torrent::try_from(TransmissionTorrentWrapper(make_test_torrent(
            4,
            "ubuntu",
            &["udp://b:80", "udp://a:80"],
        )))
        .unwrap();

        assert_eq!(torrent.id, 4);
        assert_eq!(torrent.name, "ubuntu");
        assert_eq!(torrent.trackers, vec!["udp://b:80", "udp://a:80"]);
    }

    #[test]
    fn torrent_without_trackers_field_has_none() {
        let torrent =
            Torrent::try_from(TransmissionTorrentWrapper(torrent_from_json(serde_json::json!({
                "id": 7,
                "name": "fedora",
            }))))
            .unwrap();

        assert_eq!(torrent.id, 7);
        assert!(torrent.trackers.is_empty());
    }

    #[test]
    fn torrent_without_id_is_rejected() {
        let result = Torrent::try_from(TransmissionTorrentWrapper(torrent_from_json(
            serde_json::json!({ "name": "orphan" }),
        )));

        assert!(matches!(result, Err(DaemonError::Other(_))));
    }

    #[test]
    fn session_maps_to_rpc_version() {
        let version: RpcVersion = TransmissionSessionWrapper(make_test_session(17, 14)).into();
        assert_eq!(version.version, 17);
        assert_eq!(version.minimum, 14);
        assert_eq!(version.daemon_version, "4.0.5 (a6fe2a64aa)");
    }
}
