//! HTTP server configuration types

use crate::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use sysmon_domain::error::{Error, Result};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

impl ServerConfig {
    /// Bind address parsed from `host`
    ///
    /// Only literal IP addresses are accepted; names such as `localhost` are
    /// rejected rather than resolved.
    pub fn address(&self) -> Result<IpAddr> {
        self.host.parse().map_err(|_| {
            Error::configuration(format!(
                "Server host {:?} is not an IP address",
                self.host
            ))
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            cors: true,
        }
    }
}
