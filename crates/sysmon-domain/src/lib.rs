//! # Domain Layer
//!
//! Core types shared by every layer of sysmon.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`descriptor`] | The externally driven "current test" record |
//! | [`snapshot`] | Per-request composite metrics document |
//! | [`ports`] | Collaborator interfaces implemented by infrastructure |
//! | [`error`] | Error taxonomy and `Result` alias |

pub mod descriptor;
pub mod error;
pub mod ports;
pub mod snapshot;

pub use descriptor::TestDescriptor;
pub use error::{Error, Result};
pub use ports::MetricsSource;
pub use snapshot::{
    CpuMetrics, FilesystemMetrics, IoMetrics, MemoryMetrics, MetricsSnapshot, SocketMetrics,
};
