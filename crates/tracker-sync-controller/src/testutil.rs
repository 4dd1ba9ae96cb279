//! Shared test utilities and fixtures.
//!
//! The transmission_rpc response types are built from JSON the way the daemon sends them.

use serde_json::{Value, json};
use transmission_rpc::types::{Nothing, RpcResponse, SessionGet, Torrent, Torrents};

const SESSION_GET: &str = include_str!("../tests/fixtures/session-get.json");

fn session_json(rpc_version: i64, rpc_version_minimum: i64) -> Value {
    let mut session: Value = serde_json::from_str(SESSION_GET).unwrap();
    session["rpc-version"] = json!(rpc_version);
    session["rpc-version-minimum"] = json!(rpc_version_minimum);
    session
}

pub(crate) fn torrent_json(id: i64, name: &str, trackers: &[&str]) -> Value {
    let trackers: Vec<Value> = trackers
        .iter()
        .enumerate()
        .map(|(i, announce)| json!({ "announce": announce, "id": i, "tier": i }))
        .collect();
    json!({ "id": id, "name": name, "trackers": trackers })
}

pub(crate) fn torrent_from_json(value: Value) -> Torrent {
    serde_json::from_value(value).unwrap()
}

pub(crate) fn make_test_torrent(id: i64, name: &str, trackers: &[&str]) -> Torrent {
    torrent_from_json(torrent_json(id, name, trackers))
}

pub(crate) fn make_test_session(rpc_version: i64, rpc_version_minimum: i64) -> SessionGet {
    serde_json::from_value(session_json(rpc_version, rpc_version_minimum)).unwrap()
}

pub(crate) fn session_response(
    rpc_version: i64,
    rpc_version_minimum: i64,
) -> RpcResponse<SessionGet> {
    serde_json::from_value(json!({
        "result": "success",
        "arguments": session_json(rpc_version, rpc_version_minimum),
    }))
    .unwrap()
}

pub(crate) fn torrents_response(torrents: Vec<Value>) -> RpcResponse<Torrents<Torrent>> {
    serde_json::from_value(json!({ "result": "success", "arguments": { "torrents": torrents } }))
        .unwrap()
}

pub(crate) fn set_response(result: &str) -> RpcResponse<Nothing> {
    serde_json::from_value(json!({ "result": result, "arguments": {} })).unwrap()
}
