//! Host metrics collection
//!
//! [`HostMetricsSource`] is the production [`MetricsSource`]: CPU and network
//! counters come from `sysinfo`, filesystem usage from `statvfs`, and memory
//! figures and socket counts from `/proc` on Linux.

pub mod filesystem;
pub mod memory;
pub mod sockets;

use crate::config::MetricsConfig;
use crate::constants::{PROC_MEMINFO, PROC_NET_DIR};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, MINIMUM_CPU_UPDATE_INTERVAL, Networks, RefreshKind, System};
use sysmon_domain::error::Result;
use sysmon_domain::{
    CpuMetrics, FilesystemMetrics, IoMetrics, MemoryMetrics, MetricsSource, SocketMetrics,
};

pub use filesystem::{BlockCounts, filesystem_usage};
pub use memory::{MemInfo, parse_meminfo, read_meminfo};
pub use sockets::{count_sockets, parse_socket_table};

/// Metrics collaborator backed by the local host
///
/// Holds no OS handles between calls; every call samples fresh, so concurrent
/// requests never contend on shared collector state.
#[derive(Debug, Clone)]
pub struct HostMetricsSource {
    cpu_sample_interval: Duration,
    mount_point: PathBuf,
    proc_net_dir: PathBuf,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    meminfo_path: PathBuf,
}

impl HostMetricsSource {
    /// Create a collector from configuration
    pub fn new(config: &MetricsConfig) -> Self {
        Self {
            cpu_sample_interval: config.cpu_sample_interval(),
            mount_point: config.filesystem_mount_point.clone(),
            proc_net_dir: PathBuf::from(PROC_NET_DIR),
            meminfo_path: PathBuf::from(PROC_MEMINFO),
        }
    }

    /// Read socket tables from another directory
    pub fn with_proc_net_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.proc_net_dir = dir.into();
        self
    }

    /// Read memory figures from another meminfo file
    pub fn with_meminfo_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.meminfo_path = path.into();
        self
    }
}

impl Default for HostMetricsSource {
    fn default() -> Self {
        Self::new(&MetricsConfig::default())
    }
}

impl MetricsSource for HostMetricsSource {
    fn cpu(&self) -> Result<CpuMetrics> {
        let mut system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );

        // Usage is the delta between two refreshes
        thread::sleep(self.cpu_sample_interval.max(MINIMUM_CPU_UPDATE_INTERVAL));
        system.refresh_cpu_usage();

        let usage = f64::from(system.global_cpu_usage());
        Ok(CpuMetrics {
            cpu_usage: ((usage * 10.0).round() / 10.0) as f32,
            cpu_cores: system.cpus().len(),
        })
    }

    fn io(&self) -> Result<IoMetrics> {
        let networks = Networks::new_with_refreshed_list();

        let mut metrics = IoMetrics {
            io_bytes_sent: 0,
            io_bytes_recv: 0,
            io_packets_sent: 0,
            io_packets_recv: 0,
        };
        for (_interface, data) in &networks {
            metrics.io_bytes_sent += data.total_transmitted();
            metrics.io_bytes_recv += data.total_received();
            metrics.io_packets_sent += data.total_packets_transmitted();
            metrics.io_packets_recv += data.total_packets_received();
        }

        Ok(metrics)
    }

    #[cfg(target_os = "linux")]
    fn memory(&self) -> Result<MemoryMetrics> {
        read_meminfo(&self.meminfo_path).map(MemInfo::to_metrics)
    }

    #[cfg(not(target_os = "linux"))]
    fn memory(&self) -> Result<MemoryMetrics> {
        let mut system = System::new();
        system.refresh_memory();

        let total = system.total_memory();
        let available = system.available_memory();
        Ok(MemoryMetrics {
            memory_total: total,
            memory_used: system.used_memory(),
            memory_free: system.free_memory(),
            memory_percent: sysmon_domain::snapshot::percent(
                total.saturating_sub(available),
                total,
            ),
        })
    }

    fn filesystem(&self) -> Result<FilesystemMetrics> {
        filesystem_usage(&self.mount_point)
    }

    #[cfg(target_os = "linux")]
    fn sockets(&self) -> Result<SocketMetrics> {
        count_sockets(&self.proc_net_dir)
    }

    #[cfg(not(target_os = "linux"))]
    fn sockets(&self) -> Result<SocketMetrics> {
        Err(sysmon_domain::Error::unsupported(format!(
            "socket enumeration is only available on Linux ({} not read)",
            self.proc_net_dir.display()
        )))
    }
}
