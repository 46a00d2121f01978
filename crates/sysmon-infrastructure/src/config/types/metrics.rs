//! Metrics configuration types

use crate::constants::{DEFAULT_CPU_SAMPLE_INTERVAL_MS, DEFAULT_FILESYSTEM_MOUNT_POINT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Metrics configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Interval CPU usage is measured over, in milliseconds
    pub cpu_sample_interval_ms: u64,

    /// Mount point reported in `filesystem_metrics`
    pub filesystem_mount_point: PathBuf,
}

impl MetricsConfig {
    /// CPU sampling interval as a [`Duration`]
    pub fn cpu_sample_interval(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_interval_ms)
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            cpu_sample_interval_ms: DEFAULT_CPU_SAMPLE_INTERVAL_MS,
            filesystem_mount_point: PathBuf::from(DEFAULT_FILESYSTEM_MOUNT_POINT),
        }
    }
}
