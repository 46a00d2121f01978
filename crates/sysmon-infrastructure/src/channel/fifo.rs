//! FIFO creation

use crate::error_ext::ErrorContext;
use nix::sys::stat::Mode;
use nix::unistd::mkfifo;
use std::fs;
use std::io::ErrorKind;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;
use sysmon_domain::error::{Error, Result};
use tracing::info;

/// Outcome of [`ensure_channel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    /// The FIFO was already present
    Existing,
    /// The FIFO was created by this call
    Created,
}

/// Make sure a FIFO exists at `path`, creating it (mode 0666 before umask) if absent
///
/// Fails when the FIFO cannot be created or when `path` holds something that
/// is not a FIFO. Callers treat any error as fatal at startup.
pub fn ensure_channel(path: &Path) -> Result<ChannelStatus> {
    match fs::metadata(path) {
        Ok(meta) if meta.file_type().is_fifo() => Ok(ChannelStatus::Existing),
        Ok(_) => Err(Error::channel(format!(
            "{} exists but is not a FIFO",
            path.display()
        ))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            mkfifo(path, fifo_mode())
                .channel_context(format!("Failed to create FIFO at {}", path.display()))?;
            info!(path = %path.display(), "Created descriptor channel");
            Ok(ChannelStatus::Created)
        }
        Err(e) => Err(Error::channel_with_source(
            format!("Failed to inspect {}", path.display()),
            e,
        )),
    }
}

fn fifo_mode() -> Mode {
    Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IWGRP | Mode::S_IROTH | Mode::S_IWOTH
}
