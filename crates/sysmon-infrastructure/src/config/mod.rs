//! Configuration
//!
//! Typed configuration sections and the Figment-based loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, ChannelConfig, LoggingConfig, MalformedLinePolicy, MetricsConfig, ServerConfig,
};
