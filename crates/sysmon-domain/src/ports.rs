//! Domain ports
//!
//! Interfaces the server depends on and the infrastructure layer implements.

use crate::error::Result;
use crate::snapshot::{CpuMetrics, FilesystemMetrics, IoMetrics, MemoryMetrics, SocketMetrics};

/// Source of host metrics
///
/// Every method performs blocking work. [`MetricsSource::cpu`] in particular
/// sleeps for a sampling interval so that usage is measured over time rather
/// than taken as an instantaneous reading. Callers on an async runtime must
/// run these on a blocking pool.
pub trait MetricsSource: Send + Sync {
    /// CPU usage over the sampling interval and logical core count
    fn cpu(&self) -> Result<CpuMetrics>;

    /// Network I/O counters since boot
    fn io(&self) -> Result<IoMetrics>;

    /// Virtual memory usage
    fn memory(&self) -> Result<MemoryMetrics>;

    /// Usage of the monitored filesystem
    fn filesystem(&self) -> Result<FilesystemMetrics>;

    /// Inet socket counts
    fn sockets(&self) -> Result<SocketMetrics>;
}
