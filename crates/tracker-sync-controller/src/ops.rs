//! Internal trait abstracting Transmission RPC operations.
//!
//! This module provides the [`TransmissionOps`] trait which abstracts the underlying
//! transmission client, enabling mocking in tests.

use transmission_rpc::{
    SharableTransClient,
    types::{
        Id, Nothing, Result as TransResult, RpcResponse, SessionGet, Torrent, TorrentGetField,
        TorrentSetArgs, Torrents,
    },
};

/// Internal trait that abstracts the transmission client operations.
/// This allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub(crate) trait TransmissionOps {
    async fn session_get(&self) -> TransResult<RpcResponse<SessionGet>>;
    async fn torrent_get(
        &self,
        fields: Vec<TorrentGetField>,
    ) -> TransResult<RpcResponse<Torrents<Torrent>>>;
    async fn torrent_set(
        &self,
        args: TorrentSetArgs,
        ids: Vec<Id>,
    ) -> TransResult<RpcResponse<Nothing>>;
}

impl TransmissionOps for SharableTransClient {
    async fn session_get(&self) -> TransResult<RpcResponse<SessionGet>> {
        SharableTransClient::session_get(self).await
    }

    async fn torrent_get(
        &self,
        fields: Vec<TorrentGetField>,
    ) -> TransResult<RpcResponse<Torrents<Torrent>>> {
        SharableTransClient::torrent_get(self, Some(fields), None).await
    }

    async fn torrent_set(
        &self,
        args: TorrentSetArgs,
        ids: Vec<Id>,
    ) -> TransResult<RpcResponse<Nothing>> {
        SharableTransClient::torrent_set(self, args, Some(ids)).await
    }
}
