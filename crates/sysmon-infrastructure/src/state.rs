//! Shared current-test state
//!
//! The descriptor ingestor is the only writer; HTTP handlers are the readers.
//! Each publish swaps in a complete [`TestDescriptor`], so a reader sees either
//! the previous record or the new one, never a mix of the two.

use arc_swap::ArcSwap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use sysmon_domain::TestDescriptor;

/// Atomically swapped holder of the latest [`TestDescriptor`]
#[derive(Debug)]
pub struct DescriptorCell {
    current: ArcSwap<TestDescriptor>,
    updates: AtomicU64,
}

impl DescriptorCell {
    /// Create a cell holding the `{"None", 0}` sentinel
    pub fn new() -> Self {
        Self::with_descriptor(TestDescriptor::none())
    }

    /// Create a cell holding `descriptor`
    pub fn with_descriptor(descriptor: TestDescriptor) -> Self {
        Self {
            current: ArcSwap::from_pointee(descriptor),
            updates: AtomicU64::new(0),
        }
    }

    /// Replace the current descriptor
    pub fn publish(&self, descriptor: TestDescriptor) {
        self.current.store(Arc::new(descriptor));
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Latest published descriptor
    pub fn current(&self) -> Arc<TestDescriptor> {
        self.current.load_full()
    }

    /// Number of descriptors published since creation
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }
}

impl Default for DescriptorCell {
    fn default() -> Self {
        Self::new()
    }
}
