//! Descriptor line parsing

use sysmon_domain::TestDescriptor;
use sysmon_domain::error::{Error, Result};

/// Parse one raw channel line into a descriptor
///
/// The line is trimmed, then split on `,` into exactly two fields: the label,
/// kept verbatim, and a non-negative integer duration (surrounding whitespace
/// allowed). Blank lines yield `Ok(None)`. Anything else that does not fit is
/// [`Error::MalformedDescriptor`].
pub fn parse_descriptor(raw: &[u8]) -> Result<Option<TestDescriptor>> {
    let Ok(line) = std::str::from_utf8(raw) else {
        return Err(Error::malformed_descriptor(
            String::from_utf8_lossy(raw).trim(),
            "not valid UTF-8",
        ));
    };

    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').collect();
    let [kind, duration] = fields.as_slice() else {
        return Err(Error::malformed_descriptor(
            line,
            format!("expected 2 comma-separated fields, found {}", fields.len()),
        ));
    };

    let duration_seconds = duration.trim().parse::<u64>().map_err(|e| {
        Error::malformed_descriptor(line, format!("invalid duration {duration:?}: {e}"))
    })?;

    Ok(Some(TestDescriptor::new(*kind, duration_seconds)))
}
