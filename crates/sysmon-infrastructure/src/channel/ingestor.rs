//! Descriptor ingestor
//!
//! Runs on its own OS thread for the lifetime of the process. The thread
//! blocks on the FIFO independently of the async runtime and is detached, so
//! it never holds up process exit.

use crate::config::{ChannelConfig, MalformedLinePolicy};
use crate::constants::{INGESTOR_THREAD_NAME, MAX_DESCRIPTOR_LINE_BYTES};
use crate::error_ext::ErrorContext;
use crate::state::DescriptorCell;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use sysmon_domain::error::{Error, Result};
use tracing::{debug, error, info, warn};

/// Counters describing ingestion progress
#[derive(Debug, Default)]
pub struct IngestStats {
    sessions: AtomicU64,
    accepted: AtomicU64,
    rejected: AtomicU64,
}

impl IngestStats {
    /// Writer sessions opened so far
    pub fn sessions(&self) -> u64 {
        self.sessions.load(Ordering::Relaxed)
    }

    /// Descriptors published
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    /// Malformed lines seen
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }
}

/// Reads descriptor lines from the channel and publishes them into a [`DescriptorCell`]
#[derive(Debug)]
pub struct DescriptorIngestor {
    path: PathBuf,
    policy: MalformedLinePolicy,
    cell: Arc<DescriptorCell>,
    stats: Arc<IngestStats>,
}

impl DescriptorIngestor {
    /// Create an ingestor for the configured channel
    pub fn new(config: &ChannelConfig, cell: Arc<DescriptorCell>) -> Self {
        Self {
            path: config.path.clone(),
            policy: config.on_malformed,
            cell,
            stats: Arc::new(IngestStats::default()),
        }
    }

    /// Start the ingestion loop on a dedicated, detached thread
    pub fn spawn(self) -> Result<IngestorHandle> {
        let stats = Arc::clone(&self.stats);
        let thread = thread::Builder::new()
            .name(INGESTOR_THREAD_NAME.to_string())
            .spawn(move || {
                let result = self.run();
                if let Err(e) = &result {
                    error!(
                        error = %e,
                        path = %self.path.display(),
                        "Descriptor ingestor stopped; current test state is frozen"
                    );
                }
                result
            })
            .io_context("Failed to spawn descriptor ingestor thread")?;

        Ok(IngestorHandle { thread, stats })
    }

    /// Run the reopen-on-EOF loop until an error ends it
    ///
    /// Each iteration is one writer session: opening the FIFO blocks until a
    /// writer appears, and reading stops at EOF when that writer closes.
    pub fn run(&self) -> Result<()> {
        info!(path = %self.path.display(), policy = ?self.policy, "Descriptor ingestor started");
        loop {
            let file = File::open(&self.path).channel_context(format!(
                "Failed to open descriptor channel {}",
                self.path.display()
            ))?;
            let session = self.stats.sessions.fetch_add(1, Ordering::Relaxed) + 1;
            debug!(session, "Descriptor session opened");

            self.ingest(BufReader::new(file))?;

            debug!(session, "Descriptor session closed");
        }
    }

    /// Consume lines from `reader` until EOF, publishing each valid descriptor
    ///
    /// Lines longer than [`MAX_DESCRIPTOR_LINE_BYTES`] are rejected without
    /// being buffered in full.
    pub fn ingest<R: BufRead>(&self, mut reader: R) -> Result<()> {
        let limit = MAX_DESCRIPTOR_LINE_BYTES as u64 + 1;
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = (&mut reader)
                .take(limit)
                .read_until(b'\n', &mut line)
                .channel_context("Failed to read from descriptor channel")?;
            if read == 0 {
                return Ok(());
            }

            let overlong = line.len() > MAX_DESCRIPTOR_LINE_BYTES && line.last() != Some(&b'\n');
            let parsed = if overlong {
                discard_rest_of_line(&mut reader)?;
                line.truncate(MAX_DESCRIPTOR_LINE_BYTES);
                Err(Error::malformed_descriptor(
                    String::from_utf8_lossy(&line),
                    format!("line exceeds {MAX_DESCRIPTOR_LINE_BYTES} bytes"),
                ))
            } else {
                super::parse_descriptor(&line)
            };

            match parsed {
                Ok(Some(descriptor)) => {
                    debug!(kind = %descriptor.kind, duration = descriptor.duration_seconds, "Descriptor published");
                    self.cell.publish(descriptor);
                    self.stats.accepted.fetch_add(1, Ordering::Relaxed);
                }
                Ok(None) => {}
                Err(e) => {
                    self.stats.rejected.fetch_add(1, Ordering::Relaxed);
                    self.reject(e)?;
                }
            }
        }
    }

    fn reject(&self, e: Error) -> Result<()> {
        match self.policy {
            MalformedLinePolicy::Skip => {
                warn!(error = %e, "Skipping malformed descriptor line");
                Ok(())
            }
            MalformedLinePolicy::Halt => Err(e),
        }
    }
}

/// Skip input up to and including the next newline, or to EOF
fn discard_rest_of_line<R: BufRead>(reader: &mut R) -> Result<()> {
    loop {
        let (consumed, done) = {
            let buf = reader
                .fill_buf()
                .channel_context("Failed to read from descriptor channel")?;
            match buf.iter().position(|&b| b == b'\n') {
                Some(end) => (end + 1, true),
                None => (buf.len(), buf.is_empty()),
            }
        };
        reader.consume(consumed);
        if done {
            return Ok(());
        }
    }
}

/// Handle to a running [`DescriptorIngestor`] thread
///
/// Dropping the handle leaves the thread running, detached.
#[derive(Debug)]
pub struct IngestorHandle {
    thread: JoinHandle<Result<()>>,
    stats: Arc<IngestStats>,
}

impl IngestorHandle {
    /// True once the ingestion loop has ended
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Ingestion counters
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Wait for the ingestion loop to end and return its outcome
    pub fn join(self) -> Result<()> {
        self.thread
            .join()
            .map_err(|_| Error::internal("Descriptor ingestor thread panicked"))?
    }
}
