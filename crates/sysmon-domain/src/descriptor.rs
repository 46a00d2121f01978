//! Test descriptor value object
//!
//! Describes the externally initiated test run currently executing on the host.
//! A descriptor is always replaced as a whole, never edited field by field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label reported before any descriptor has been received
pub const NO_TEST_LABEL: &str = "None";

/// The `{label, duration}` pair describing the current test
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestDescriptor {
    /// Free-form test label, e.g. `load_test`
    #[serde(rename = "type")]
    pub kind: String,
    /// Planned test duration in seconds
    #[serde(rename = "duration")]
    pub duration_seconds: u64,
}

impl TestDescriptor {
    /// Create a descriptor from its parts
    pub fn new<S: Into<String>>(kind: S, duration_seconds: u64) -> Self {
        Self {
            kind: kind.into(),
            duration_seconds,
        }
    }

    /// The sentinel descriptor `{"None", 0}`
    pub fn none() -> Self {
        Self::new(NO_TEST_LABEL, 0)
    }

    /// True when this is the startup sentinel
    pub fn is_none(&self) -> bool {
        self.kind == NO_TEST_LABEL && self.duration_seconds == 0
    }
}

impl Default for TestDescriptor {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for TestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.kind, self.duration_seconds)
    }
}
