//! Reconciling torrent tracker lists against the master list.

use clap::ValueEnum;
use tracing::{error, info};

use tracker_sync_types::{Torrent, TorrentDaemon};

use crate::Error;

/// What to do when adding trackers to a single torrent fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UpdateErrorPolicy {
    /// Stop the run at the first failing torrent.
    #[default]
    Abort,
    /// Log the failure and move on to the next torrent.
    Continue,
}

/// Result of reconciling one torrent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The torrent already had every tracker of the master list.
    UpToDate,
    /// This many trackers were added.
    Added(usize),
}

/// Summary of a sync over all torrents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of torrents reported by the daemon.
    pub torrents: usize,
    /// Torrents that received new trackers.
    pub updated: usize,
    /// Torrents that needed no change.
    pub up_to_date: usize,
    /// Total number of trackers added across all torrents.
    pub trackers_added: usize,
    /// Ids of torrents whose update failed.
    pub failed: Vec<i64>,
}

/// Returns the entries of `master` the torrent does not announce to yet.
///
/// Master order is kept and master duplicates are not collapsed; only exact string matches count
/// as present.
pub fn missing_trackers(master: &[String], torrent: &Torrent) -> Vec<String> {
    let current = torrent.announce_set();
    master
        .iter()
        .filter(|tracker| !current.contains(tracker.as_str()))
        .cloned()
        .collect()
}

/// Adds the trackers `torrent` is missing with a single update call, if there are any.
pub async fn add_missing_trackers<D: TorrentDaemon>(
    daemon: &D,
    torrent: &Torrent,
    master: &[String],
) -> Result<Outcome, Error> {
    let to_add = missing_trackers(master, torrent);
    if to_add.is_empty() {
        info!("torrent {} \"{}\" has all trackers", torrent.id, torrent.name);
        return Ok(Outcome::UpToDate);
    }

    let count = to_add.len();
    daemon
        .add_trackers(torrent.id, to_add)
        .await
        .map_err(|source| Error::Update {
            id: torrent.id,
            name: torrent.name.clone(),
            source,
        })?;
    info!(
        "torrent {} \"{}\" added {} new trackers",
        torrent.id, torrent.name, count
    );
    Ok(Outcome::Added(count))
}

/// Lists all torrents and reconciles them one after the other, in daemon order.
pub async fn sync_trackers<D: TorrentDaemon>(
    daemon: &D,
    master: &[String],
    policy: UpdateErrorPolicy,
) -> Result<SyncReport, Error> {
    let torrents = daemon.list().await?;
    let mut report = SyncReport {
        torrents: torrents.len(),
        ..Default::default()
    };
    if torrents.is_empty() {
        info!("no torrents found");
        return Ok(report);
    }

    for torrent in &torrents {
        info!("torrent {} \"{}\"", torrent.id, torrent.name);
        match add_missing_trackers(daemon, torrent, master).await {
            Ok(Outcome::UpToDate) => report.up_to_date += 1,
            Ok(Outcome::Added(count)) => {
                report.updated += 1;
                report.trackers_added += count;
            }
            Err(err) => match policy {
                UpdateErrorPolicy::Abort => return Err(err),
                UpdateErrorPolicy::Continue => {
                    error!("{err}");
                    report.failed.push(torrent.id);
                }
            },
        }
    }

    Ok(report)
}
