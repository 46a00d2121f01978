//! # Infrastructure Layer
//!
//! Technical concerns supporting the sysmon server.
//!
//! ## Module Categories
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Test State
//! | Module | Description |
//! |--------|-------------|
//! | [`state`] | Atomically swapped current-test descriptor |
//! | [`channel`] | Named FIFO ingestion of descriptor updates |
//!
//! ### Host Metrics
//! | Module | Description |
//! |--------|-------------|
//! | [`metrics`] | sysinfo / statvfs / procfs backed [`MetricsSource`](sysmon_domain::MetricsSource) |

pub mod channel;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod metrics;
pub mod state;

// Re-export commonly used types
pub use channel::{DescriptorIngestor, IngestorHandle};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use metrics::HostMetricsSource;
pub use state::DescriptorCell;
