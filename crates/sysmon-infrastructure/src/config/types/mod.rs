//! Configuration types
//!
//! One file per configuration section; [`AppConfig`] composes them.

pub mod app;
pub mod channel;
pub mod logging;
pub mod metrics;
pub mod server;

pub use app::AppConfig;
pub use channel::{ChannelConfig, MalformedLinePolicy};
pub use logging::LoggingConfig;
pub use metrics::MetricsConfig;
pub use server::ServerConfig;
