use clap::Parser;
use url::Url;

use tracker_sync::{NGOSANG_TRACKERS_ALL_CDN, Settings, UpdateErrorPolicy};
use tracker_sync_controller::{DEFAULT_RPC_PATH, RpcConfig};

/// Top-level CLI struct for the binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Transmission daemon host.
    #[arg(long, env = "TRANSMISSION_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Transmission RPC port.
    #[arg(long, env = "TRANSMISSION_PORT", default_value_t = 9091)]
    pub port: u16,

    /// Talk to the daemon over HTTPS.
    #[arg(long, env = "TRANSMISSION_USE_HTTPS", default_value_t = false)]
    pub use_https: bool,

    /// Path of the RPC endpoint.
    #[arg(long, env = "TRANSMISSION_RPC_PATH", default_value = DEFAULT_RPC_PATH)]
    pub rpc_path: String,

    /// RPC username. Leave empty to skip authentication.
    #[arg(long, env = "TRANSMISSION_USERNAME", default_value = "rpcuser")]
    pub username: String,

    /// RPC password.
    #[arg(
        long,
        env = "TRANSMISSION_PASSWORD",
        default_value = "rpcpass",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    /// Log at debug level, including raw RPC traffic (unless RUST_LOG is set).
    #[arg(long, env = "TRACKER_SYNC_DEBUG", default_value_t = false)]
    pub debug: bool,

    /// URL of the plaintext master tracker list.
    #[arg(long, env = "TRACKERS_SOURCE", default_value = NGOSANG_TRACKERS_ALL_CDN)]
    pub trackers_source: Url,

    /// What to do when updating a single torrent fails.
    #[arg(
        long,
        value_enum,
        env = "TRACKER_SYNC_ON_UPDATE_ERROR",
        default_value = "abort"
    )]
    pub on_update_error: UpdateErrorPolicy,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            rpc: RpcConfig {
                host: cli.host,
                port: cli.port,
                use_https: cli.use_https,
                rpc_path: cli.rpc_path,
                username: cli.username,
                password: cli.password,
            },
            trackers_source: cli.trackers_source,
            on_update_error: cli.on_update_error,
        }
    }
}
