//! Configuration loading and validation tests

use std::env;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use sysmon_domain::error::Error;
use sysmon_infrastructure::config::loader::validate_app_config;
use sysmon_infrastructure::config::{AppConfig, ConfigLoader, MalformedLinePolicy};
use sysmon_infrastructure::constants::{DEFAULT_CHANNEL_PATH, DEFAULT_SERVER_PORT};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("sysmon.toml");
    fs::write(&path, contents).unwrap();
    path
}

fn set_env(key: &str, value: &str) {
    // SAFETY: every test uses its own prefix, so no variable is shared
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: see set_env
    unsafe {
        env::remove_var(key);
    }
}

#[test]
fn test_defaults_match_historical_deployment() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
    assert_eq!(config.server.port, 5000);
    assert!(config.server.cors);
    assert_eq!(config.channel.path, PathBuf::from(DEFAULT_CHANNEL_PATH));
    assert_eq!(config.channel.on_malformed, MalformedLinePolicy::Skip);
    assert_eq!(config.metrics.cpu_sample_interval_ms, 1000);
    assert_eq!(config.metrics.filesystem_mount_point, PathBuf::from("/"));
    assert_eq!(config.logging.level, "debug");
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("SYSMON_TEST_MISSING")
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
port = 8080
cors = false

[channel]
path = "/run/stress/descriptors"
on_malformed = "halt"

[metrics]
cpu_sample_interval_ms = 250
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYSMON_TEST_TOML")
        .load()
        .unwrap();

    assert_eq!(config.server.port, 8080);
    assert!(!config.server.cors);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.channel.path, PathBuf::from("/run/stress/descriptors"));
    assert_eq!(config.channel.on_malformed, MalformedLinePolicy::Halt);
    assert_eq!(config.metrics.cpu_sample_interval_ms, 250);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_env_overrides_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nport = 8080\n");

    set_env("SYSMON_TEST_ENV__SERVER__PORT", "9090");
    set_env("SYSMON_TEST_ENV__LOGGING__LEVEL", "warn");
    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYSMON_TEST_ENV")
        .load();
    remove_env("SYSMON_TEST_ENV__SERVER__PORT");
    remove_env("SYSMON_TEST_ENV__LOGGING__LEVEL");

    let config = result.unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_unknown_malformed_policy_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[channel]\non_malformed = \"ignore\"\n");

    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYSMON_TEST_POLICY")
        .load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_zero_port_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nport = 0\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYSMON_TEST_PORT")
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("port"));
}

#[test]
fn test_validation_rejects_empty_fields() {
    let mut config = AppConfig::default();
    config.server.host = "  ".to_string();
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.channel.path = PathBuf::new();
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.metrics.filesystem_mount_point = PathBuf::new();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validation_rejects_host_that_is_not_an_ip() {
    let mut config = AppConfig::default();
    config.server.host = "localhost".to_string();

    let err = validate_app_config(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("localhost"));

    config.server.host = "127.0.0.1".to_string();
    assert!(validate_app_config(&config).is_ok());
    assert_eq!(
        config.server.address().unwrap(),
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    );
}

#[test]
fn test_loader_rejects_host_name_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nhost = \"localhost\"\n");

    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYSMON_TEST_HOST")
        .load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let mut config = AppConfig::default();
    config.logging.level = "verbose".to_string();

    assert!(matches!(
        validate_app_config(&config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_loader_remembers_config_path() {
    let loader = ConfigLoader::new().with_config_path("/etc/sysmon/sysmon.toml");
    assert_eq!(
        loader.config_path(),
        Some(PathBuf::from("/etc/sysmon/sysmon.toml").as_path())
    );
    assert!(ConfigLoader::default().config_path().is_none());
}

#[test]
fn test_resolved_config_path_prefers_explicit_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let loader = ConfigLoader::new().with_config_path(&missing);
    assert_eq!(loader.resolved_config_path(), Some(missing));

    let present = write_config(&dir, "[server]\nport = 8080\n");
    let loader = ConfigLoader::new().with_config_path(&present);
    assert_eq!(loader.resolved_config_path(), Some(present));
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.server.port = 9999;
    config.channel.on_malformed = MalformedLinePolicy::Halt;
    config.logging.file_output = Some(dir.path().join("sysmon.log"));

    let loader = ConfigLoader::new().with_env_prefix("SYSMON_TEST_SAVE");
    loader.save_to_file(&config, &path).unwrap();

    let loaded = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("SYSMON_TEST_SAVE")
        .load()
        .unwrap();
    assert_eq!(loaded, config);
}
