//! Metrics query service
//!
//! Assembles a [`MetricsSnapshot`] for one request on Tokio's blocking pool:
//! queries the metrics collaborator section by section, then reads the latest
//! descriptor.
//! The two halves are read independently and may reflect slightly different
//! instants.

use std::sync::Arc;
use sysmon_domain::error::{Error, Result};
use sysmon_domain::{MetricsSnapshot, MetricsSource};
use sysmon_infrastructure::DescriptorCell;
use tracing::debug;

/// Builds per-request snapshots from shared state and a metrics collaborator
#[derive(Clone)]
pub struct MetricsQueryService {
    descriptor: Arc<DescriptorCell>,
    metrics: Arc<dyn MetricsSource>,
}

impl MetricsQueryService {
    /// Create a service reading `descriptor` and querying `metrics`
    pub fn new(descriptor: Arc<DescriptorCell>, metrics: Arc<dyn MetricsSource>) -> Self {
        Self {
            descriptor,
            metrics,
        }
    }

    /// Collect a fresh snapshot
    ///
    /// Any collaborator error fails the whole snapshot; nothing partial is
    /// returned and the descriptor cell is never written.
    pub async fn snapshot(&self) -> Result<MetricsSnapshot> {
        let metrics = Arc::clone(&self.metrics);
        let descriptor = Arc::clone(&self.descriptor);

        let snapshot = tokio::task::spawn_blocking(move || {
            let cpu_metrics = metrics.cpu()?;
            let io_metrics = metrics.io()?;
            let vm_metrics = metrics.memory()?;
            let filesystem_metrics = metrics.filesystem()?;
            let sock_metrics = metrics.sockets()?;
            Ok::<_, Error>(MetricsSnapshot {
                current_test: descriptor.current().as_ref().clone(),
                cpu_metrics,
                io_metrics,
                vm_metrics,
                filesystem_metrics,
                sock_metrics,
            })
        })
        .await
        .map_err(|e| Error::internal(format!("Metrics collection task failed: {e}")))??;

        debug!(current_test = %snapshot.current_test, "Snapshot collected");
        Ok(snapshot)
    }
}
