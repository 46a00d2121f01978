//! Rocket configuration tests

use rocket::config::LogLevel;
use std::net::{IpAddr, Ipv4Addr};
use sysmon_domain::error::Error;
use sysmon_infrastructure::config::{LoggingConfig, ServerConfig};
use sysmon_server::rocket_config;

#[test]
fn test_defaults_bind_all_interfaces_on_5000_with_debug_logs() {
    let config = rocket_config(&ServerConfig::default(), &LoggingConfig::default()).unwrap();

    assert_eq!(config.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 5000);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_custom_host_and_port() {
    let server = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        cors: true,
    };
    let config = rocket_config(&server, &LoggingConfig::default()).unwrap();

    assert_eq!(config.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 8080);
}

#[test]
fn test_log_level_mapping() {
    let level_for = |level: &str| {
        let logging = LoggingConfig {
            level: level.to_string(),
            ..LoggingConfig::default()
        };
        rocket_config(&ServerConfig::default(), &logging)
            .unwrap()
            .log_level
    };

    assert_eq!(level_for("trace"), LogLevel::Debug);
    assert_eq!(level_for("info"), LogLevel::Normal);
    assert_eq!(level_for("warn"), LogLevel::Critical);
    assert_eq!(level_for("error"), LogLevel::Critical);
}

#[test]
fn test_host_name_is_not_widened_to_all_interfaces() {
    for host in ["localhost", "127.0.0.1 ", "my-host.internal"] {
        let server = ServerConfig {
            host: host.to_string(),
            ..ServerConfig::default()
        };

        assert!(matches!(
            rocket_config(&server, &LoggingConfig::default()),
            Err(Error::Configuration { .. })
        ));
    }
}

#[test]
fn test_ipv6_loopback_is_accepted() {
    let server = ServerConfig {
        host: "::1".to_string(),
        ..ServerConfig::default()
    };
    let config = rocket_config(&server, &LoggingConfig::default()).unwrap();

    assert!(config.address.is_loopback());
    assert!(config.address.is_ipv6());
}
