//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{ChannelConfig, LoggingConfig, MetricsConfig, ServerConfig};

/// Complete sysmon configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Descriptor channel settings
    pub channel: ChannelConfig,
    /// Metrics collection settings
    pub metrics: MetricsConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
