//! Filesystem usage via `statvfs`

use crate::error_ext::ErrorContext;
use nix::sys::statvfs::statvfs;
use std::path::Path;
use sysmon_domain::error::Result;
use sysmon_domain::snapshot::percent;
use sysmon_domain::FilesystemMetrics;

/// Raw block counts reported by `statvfs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCounts {
    /// Fragment size in bytes
    pub fragment_size: u64,
    /// Total blocks
    pub blocks: u64,
    /// Free blocks, including those reserved for root
    pub blocks_free: u64,
    /// Free blocks available to unprivileged users
    pub blocks_available: u64,
}

impl BlockCounts {
    /// Convert block counts to byte totals
    ///
    /// `disk_free` is what unprivileged users can still write; `disk_used`
    /// excludes the root reserve, so `disk_percent` is measured against
    /// `used + free` rather than the raw total.
    pub fn to_metrics(self) -> FilesystemMetrics {
        let disk_total = self.blocks.saturating_mul(self.fragment_size);
        let disk_free = self.blocks_available.saturating_mul(self.fragment_size);
        let disk_used = self
            .blocks
            .saturating_sub(self.blocks_free)
            .saturating_mul(self.fragment_size);

        FilesystemMetrics {
            disk_total,
            disk_used,
            disk_free,
            disk_percent: percent(disk_used, disk_used.saturating_add(disk_free)),
        }
    }
}

/// Usage of the filesystem mounted at `mount_point`
pub fn filesystem_usage(mount_point: &Path) -> Result<FilesystemMetrics> {
    let stat = statvfs(mount_point)
        .metrics_context(format!("statvfs failed for {}", mount_point.display()))?;

    #[allow(clippy::useless_conversion)]
    let counts = BlockCounts {
        fragment_size: u64::from(stat.fragment_size()),
        blocks: u64::from(stat.blocks()),
        blocks_free: u64::from(stat.blocks_free()),
        blocks_available: u64::from(stat.blocks_available()),
    };

    Ok(counts.to_metrics())
}
