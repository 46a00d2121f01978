//! Descriptor channel
//!
//! External producers announce the test they are running by writing
//! `<label>,<integer>\n` lines into a named FIFO. One writer session runs at a
//! time; when it closes its end the reader sees EOF, reopens the FIFO and waits
//! for the next session.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`fifo`] | Creating the FIFO at startup |
//! | [`parser`] | Parsing one descriptor line |
//! | [`ingestor`] | The long-running reader thread |

pub mod fifo;
pub mod ingestor;
pub mod parser;

pub use fifo::{ChannelStatus, ensure_channel};
pub use ingestor::{DescriptorIngestor, IngestStats, IngestorHandle};
pub use parser::parse_descriptor;
