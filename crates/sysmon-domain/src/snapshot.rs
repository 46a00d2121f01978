//! Metrics snapshot types
//!
//! A [`MetricsSnapshot`] is built fresh for every request and serialized
//! straight into the response body. Field names are part of the HTTP contract.

use serde::{Deserialize, Serialize};

use crate::descriptor::TestDescriptor;

/// CPU utilization sampled over an interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuMetrics {
    /// Global CPU usage percentage (0-100)
    pub cpu_usage: f32,
    /// Number of logical cores
    pub cpu_cores: usize,
}

/// Network I/O counters summed over all interfaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoMetrics {
    pub io_bytes_sent: u64,
    pub io_bytes_recv: u64,
    pub io_packets_sent: u64,
    pub io_packets_recv: u64,
}

/// Virtual memory usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    /// Total memory in bytes
    pub memory_total: u64,
    /// Used memory in bytes
    pub memory_used: u64,
    /// Free memory in bytes
    pub memory_free: u64,
    /// Memory usage percentage (0-100)
    pub memory_percent: f32,
}

/// Usage of a single mounted filesystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesystemMetrics {
    /// Total space in bytes
    pub disk_total: u64,
    /// Used space in bytes
    pub disk_used: u64,
    /// Space available to unprivileged users in bytes
    pub disk_free: u64,
    /// Usage percentage (0-100)
    pub disk_percent: f32,
}

/// Counts of inet sockets on the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketMetrics {
    pub active_sockets: usize,
    pub listening_sockets: usize,
    pub established_sockets: usize,
}

/// Composite document returned by `GET /api`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub current_test: TestDescriptor,
    pub cpu_metrics: CpuMetrics,
    pub io_metrics: IoMetrics,
    pub vm_metrics: MemoryMetrics,
    pub filesystem_metrics: FilesystemMetrics,
    pub sock_metrics: SocketMetrics,
}

/// Percentage of `part` in `whole`, rounded to one decimal place
///
/// Returns `0.0` when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    let value = (part as f64 / whole as f64) * 100.0;
    ((value * 10.0).round() / 10.0) as f32
}
