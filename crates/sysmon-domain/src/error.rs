//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sysmon
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Descriptor channel could not be created, opened or read
    #[error("Channel error: {message}")]
    Channel {
        /// Description of the channel error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A channel line that is not `<label>,<integer>`
    #[error("Malformed descriptor {line:?}: {reason}")]
    MalformedDescriptor {
        /// The offending line, lossily decoded
        line: String,
        /// Why the line was rejected
        reason: String,
    },

    /// A metrics collaborator failed
    #[error("Metrics error: {message}")]
    Metrics {
        /// Description of the metrics error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation not available on this platform
    #[error("Unsupported: {message}")]
    Unsupported {
        /// What is not supported
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

}

// Channel and descriptor error creation methods
impl Error {
    /// Create a channel error
    pub fn channel<S: Into<String>>(message: S) -> Self {
        Self::Channel {
            message: message.into(),
            source: None,
        }
    }

    /// Create a channel error with source
    pub fn channel_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Channel {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a malformed descriptor error
    pub fn malformed_descriptor<L: Into<String>, R: Into<String>>(line: L, reason: R) -> Self {
        Self::MalformedDescriptor {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

// Metrics and platform error creation methods
impl Error {
    /// Create a metrics error
    pub fn metrics<S: Into<String>>(message: S) -> Self {
        Self::Metrics {
            message: message.into(),
            source: None,
        }
    }


    /// Create an unsupported-platform error
    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
