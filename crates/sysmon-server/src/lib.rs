//! # sysmon Server
//!
//! HTTP endpoint reporting live host metrics merged with the "current test"
//! announced by an external stress driver through a named FIFO.
//!
//! ## Architecture
//!
//! - Domain layer: descriptors, snapshots and ports (sysmon-domain)
//! - Infrastructure: config, logging, channel ingestion, host metrics (sysmon-infrastructure)
//! - Server: HTTP surface and request orchestration (this crate)
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`MetricsQueryService`] | Builds one snapshot per request |
//! | [`api_rocket`] | Rocket instance serving `GET /api` |

// Allow Rust 2024 compatibility issues from Rocket's route macros
#![allow(rust_2024_compatibility)]

pub mod api;
pub mod cors;
pub mod init;
pub mod service;

pub use api::{api_rocket, rocket_config};
pub use init::run;
pub use service::MetricsQueryService;
