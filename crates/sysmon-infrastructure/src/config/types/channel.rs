//! Descriptor channel configuration types

use crate::constants::DEFAULT_CHANNEL_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the ingestor does with a line that is not `<label>,<integer>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Log the line and keep reading
    #[default]
    Skip,
    /// Stop ingesting; the published descriptor stays at its last good value
    Halt,
}

/// Descriptor channel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Filesystem path of the named FIFO
    pub path: PathBuf,

    /// Handling of malformed descriptor lines
    pub on_malformed: MalformedLinePolicy,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CHANNEL_PATH),
            on_malformed: MalformedLinePolicy::default(),
        }
    }
}
