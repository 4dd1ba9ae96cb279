//! Connection settings for the Transmission RPC endpoint.

use std::{fmt, net::IpAddr};

use transmission_rpc::types::BasicAuth;
use url::Url;

use tracker_sync_types::DaemonError;

/// Path Transmission serves its RPC interface on unless reconfigured.
pub const DEFAULT_RPC_PATH: &str = "/transmission/rpc";

/// Configuration for reaching the Transmission daemon.
#[derive(Clone, PartialEq, Eq)]
pub struct RpcConfig {
    /// Hostname or IP address of the daemon.
    pub host: String,
    /// RPC port.
    pub port: u16,
    /// Whether to talk HTTPS instead of plain HTTP.
    pub use_https: bool,
    /// Path of the RPC endpoint, usually [`DEFAULT_RPC_PATH`].
    pub rpc_path: String,
    /// RPC username. Basic auth is skipped when empty.
    pub username: String,
    /// RPC password.
    pub password: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9091,
            use_https: false,
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl RpcConfig {
    /// Builds the full endpoint URL, e.g. `http://127.0.0.1:9091/transmission/rpc`.
    ///
    /// `host` is a hostname or an IP address; IPv6 literals may be given with or without brackets.
    pub fn rpc_url(&self) -> Result<Url, DaemonError> {
        let invalid =
            |reason: String| DaemonError::InvalidConfig(format!("Invalid RPC URL: {reason}"));

        if self.host.contains(['/', '?', '#', '@']) {
            return Err(invalid(format!("host {:?} is not a bare host name", self.host)));
        }
        let host = match self.host.parse::<IpAddr>() {
            Ok(IpAddr::V6(ip)) => format!("[{ip}]"),
            _ => self.host.clone(),
        };

        let scheme = if self.use_https { "https" } else { "http" };
        let mut url =
            Url::parse(&format!("{scheme}://localhost")).map_err(|e| invalid(e.to_string()))?;
        url.set_host(Some(&host))
            .map_err(|e| invalid(e.to_string()))?;
        url.set_port(Some(self.port))
            .map_err(|()| invalid(format!("cannot set port {}", self.port)))?;
        url.set_path(&self.rpc_path);
        Ok(url)
    }

    /// Credentials to send, if any.
    pub fn authentication(&self) -> Option<BasicAuth> {
        if self.username.is_empty() {
            return None;
        }
        Some(BasicAuth {
            user: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

impl fmt::Debug for RpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credentials.
        write!(
            f,
            "Rpc(host=\"{}\", port={}, https={}, path=\"{}\", username=<{}>, password=<{}>)",
            self.host,
            self.port,
            self.use_https,
            self.rpc_path,
            if self.username.is_empty() { "unset" } else { "set" },
            if self.password.is_empty() { "unset" } else { "set" },
        )
    }
}
