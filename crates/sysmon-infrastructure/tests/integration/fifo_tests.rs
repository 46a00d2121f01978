//! FIFO creation tests

use std::fs;
use std::os::unix::fs::FileTypeExt;
use sysmon_domain::error::Error;
use sysmon_infrastructure::channel::{ChannelStatus, ensure_channel};
use tempfile::TempDir;

#[test]
fn test_creates_missing_fifo() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stress_to_api");

    assert_eq!(ensure_channel(&path).unwrap(), ChannelStatus::Created);
    assert!(fs::metadata(&path).unwrap().file_type().is_fifo());
}

#[test]
fn test_reuses_existing_fifo() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stress_to_api");

    ensure_channel(&path).unwrap();
    assert_eq!(ensure_channel(&path).unwrap(), ChannelStatus::Existing);
}

#[test]
fn test_regular_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stress_to_api");
    fs::write(&path, "load_test,30\n").unwrap();

    let err = ensure_channel(&path).unwrap_err();
    assert!(matches!(err, Error::Channel { .. }));
    assert!(err.to_string().contains("not a FIFO"));
}

#[test]
fn test_missing_parent_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("stress_to_api");

    assert!(matches!(
        ensure_channel(&path),
        Err(Error::Channel { .. })
    ));
}
