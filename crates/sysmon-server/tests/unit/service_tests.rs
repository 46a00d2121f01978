//! Metrics query service tests

use crate::test_utils::FakeMetricsSource;
use std::sync::Arc;
use sysmon_domain::{Error, TestDescriptor};
use sysmon_infrastructure::DescriptorCell;
use sysmon_server::MetricsQueryService;

fn service(cell: &Arc<DescriptorCell>, source: FakeMetricsSource) -> MetricsQueryService {
    MetricsQueryService::new(Arc::clone(cell), Arc::new(source))
}

#[tokio::test]
async fn test_snapshot_before_any_descriptor_reports_sentinel() {
    let cell = Arc::new(DescriptorCell::new());
    let snapshot = service(&cell, FakeMetricsSource::default())
        .snapshot()
        .await
        .unwrap();

    assert_eq!(snapshot.current_test, TestDescriptor::none());
    assert_eq!(snapshot.cpu_metrics.cpu_cores, 8);
    assert_eq!(snapshot.sock_metrics.listening_sockets, 2);
}

#[tokio::test]
async fn test_snapshot_reflects_latest_publish() {
    let cell = Arc::new(DescriptorCell::new());
    let service = service(&cell, FakeMetricsSource::default());

    cell.publish(TestDescriptor::new("cpu_spike", 5));
    cell.publish(TestDescriptor::new("io_flood", 10));

    let snapshot = service.snapshot().await.unwrap();
    assert_eq!(snapshot.current_test, TestDescriptor::new("io_flood", 10));
}

#[tokio::test]
async fn test_collaborator_failure_fails_snapshot_and_keeps_state() {
    let cell = Arc::new(DescriptorCell::new());
    cell.publish(TestDescriptor::new("load_test", 30));

    let result = service(&cell, FakeMetricsSource::failing_sockets())
        .snapshot()
        .await;

    assert!(matches!(result, Err(Error::Unsupported { .. })));
    assert_eq!(*cell.current(), TestDescriptor::new("load_test", 30));
    assert_eq!(cell.updates(), 1);
}
