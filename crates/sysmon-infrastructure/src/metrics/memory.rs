//! Virtual memory figures from `/proc/meminfo`
//!
//! `used` excludes page cache and buffers (`total - free - buffers - cached`,
//! where `cached` includes reclaimable slab), falling back to `total - free`
//! when that would go negative. `percent` is measured against `available`.

use crate::error_ext::ErrorContext;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sysmon_domain::MemoryMetrics;
use sysmon_domain::error::{Error, Result};
use sysmon_domain::snapshot::percent;

/// Raw `/proc/meminfo` fields, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemInfo {
    pub total: u64,
    pub free: u64,
    pub available: u64,
    pub buffers: u64,
    pub cached: u64,
}

impl MemInfo {
    /// Bytes in use by processes and the kernel, excluding caches
    pub fn used(&self) -> u64 {
        self.total
            .checked_sub(self.free)
            .and_then(|v| v.checked_sub(self.buffers))
            .and_then(|v| v.checked_sub(self.cached))
            .unwrap_or_else(|| self.total.saturating_sub(self.free))
    }

    pub fn to_metrics(self) -> MemoryMetrics {
        MemoryMetrics {
            memory_total: self.total,
            memory_used: self.used(),
            memory_free: self.free,
            memory_percent: percent(self.total.saturating_sub(self.available), self.total),
        }
    }
}

/// Read and parse the meminfo file at `path`
pub fn read_meminfo(path: &Path) -> Result<MemInfo> {
    let contents = fs::read_to_string(path)
        .metrics_context(format!("Failed to read {}", path.display()))?;
    parse_meminfo(&contents).map_err(|e| Error::metrics(format!("{}: {e}", path.display())))
}

/// Parse `Key:   <value> kB` lines
///
/// `MemTotal` and `MemFree` are required. A kernel without `MemAvailable`
/// reports `free + buffers + cached` as available.
pub fn parse_meminfo(contents: &str) -> std::result::Result<MemInfo, String> {
    let fields: HashMap<&str, u64> = contents
        .lines()
        .filter_map(|line| {
            let (key, rest) = line.split_once(':')?;
            let mut parts = rest.split_whitespace();
            let value: u64 = parts.next()?.parse().ok()?;
            let bytes = match parts.next() {
                Some("kB") => value.saturating_mul(1024),
                _ => value,
            };
            Some((key.trim(), bytes))
        })
        .collect();

    let required = |key: &str| {
        fields
            .get(key)
            .copied()
            .ok_or_else(|| format!("missing {key}"))
    };
    let optional = |key: &str| fields.get(key).copied().unwrap_or(0);

    let total = required("MemTotal")?;
    let free = required("MemFree")?;
    let buffers = optional("Buffers");
    let cached = optional("Cached").saturating_add(optional("SReclaimable"));
    let available = fields
        .get("MemAvailable")
        .copied()
        .unwrap_or_else(|| free.saturating_add(buffers).saturating_add(cached));

    Ok(MemInfo {
        total,
        free,
        available,
        buffers,
        cached,
    })
}
