//! Master tracker list download and parsing.

use tracing::{debug, info};
use url::Url;

use crate::Error;

/// ngosang/trackerslist `trackers_all.txt` straight from GitHub.
pub const NGOSANG_TRACKERS_ALL: &str =
    "https://raw.githubusercontent.com/ngosang/trackerslist/master/trackers_all.txt";

/// The same list through the jsDelivr CDN mirror. Used by default.
pub const NGOSANG_TRACKERS_ALL_CDN: &str =
    "https://cdn.jsdelivr.net/gh/ngosang/trackerslist/trackers_all.txt";

/// Downloads the tracker list at `source` and parses it with [`parse_trackers`].
///
/// Transport errors and non-success HTTP statuses both fail.
pub async fn fetch_trackers(http: &reqwest::Client, source: &Url) -> Result<Vec<String>, Error> {
    info!("Downloading trackers from {source}");
    let body = http
        .get(source.clone())
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| source_error(source, e))?
        .text()
        .await
        .map_err(|e| source_error(source, e))?;

    let trackers = parse_trackers(&body);
    info!("Loaded {} trackers", trackers.len());
    debug!("Trackers: {trackers:?}");
    Ok(trackers)
}

/// Splits a plaintext tracker list into announce URLs.
///
/// Lines are trimmed and blank lines dropped. Order and duplicates are kept as published.
pub fn parse_trackers(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

pub(crate) fn source_error(source: &Url, err: reqwest::Error) -> Error {
    Error::TrackerSource {
        url: source.to_string(),
        reason: err.to_string(),
    }
}
