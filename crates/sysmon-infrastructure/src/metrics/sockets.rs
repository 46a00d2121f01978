//! Inet socket counting from the kernel's `/proc/net` tables
//!
//! Every row of `tcp`, `tcp6`, `udp` and `udp6` is one socket. Only TCP rows
//! carry a meaningful connection state, so LISTEN and ESTABLISHED are counted
//! from the TCP tables alone.

use crate::constants::{
    PROC_NET_TCP_TABLES, PROC_NET_UDP_TABLES, TCP_STATE_ESTABLISHED, TCP_STATE_LISTEN,
};
use crate::error_ext::ErrorContext;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use sysmon_domain::SocketMetrics;
use sysmon_domain::error::{Error, Result};

/// Count sockets listed in the tables under `proc_net_dir`
///
/// Missing tables are skipped (e.g. `tcp6` on hosts without IPv6). When no
/// table exists at all the platform is reported as unsupported.
pub fn count_sockets(proc_net_dir: &Path) -> Result<SocketMetrics> {
    let mut metrics = SocketMetrics::default();
    let mut tables_read = 0;

    let tables = PROC_NET_TCP_TABLES
        .iter()
        .map(|name| (name, true))
        .chain(PROC_NET_UDP_TABLES.iter().map(|name| (name, false)));

    for (name, tcp) in tables {
        let path = proc_net_dir.join(name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(e).metrics_context(format!("Failed to read {}", path.display()));
            }
        };
        tables_read += 1;

        let table = parse_socket_table(&contents, tcp)
            .map_err(|e| Error::metrics(format!("{}: {e}", path.display())))?;
        metrics.active_sockets += table.active_sockets;
        metrics.listening_sockets += table.listening_sockets;
        metrics.established_sockets += table.established_sockets;
    }

    if tables_read == 0 {
        return Err(Error::unsupported(format!(
            "no socket tables found under {}",
            proc_net_dir.display()
        )));
    }

    Ok(metrics)
}

/// Count the rows of one `/proc/net/{tcp,udp}*` table
///
/// The first line is a column header. The fourth column (`st`) holds the
/// connection state in hex.
pub fn parse_socket_table(contents: &str, tcp: bool) -> std::result::Result<SocketMetrics, String> {
    let mut metrics = SocketMetrics::default();

    for (index, row) in contents.lines().enumerate().skip(1) {
        if row.trim().is_empty() {
            continue;
        }
        let state = row
            .split_whitespace()
            .nth(3)
            .ok_or_else(|| format!("row {index} has no state column"))?;
        let state = u8::from_str_radix(state, 16)
            .map_err(|e| format!("row {index} has invalid state {state:?}: {e}"))?;

        metrics.active_sockets += 1;
        if tcp {
            match state {
                TCP_STATE_LISTEN => metrics.listening_sockets += 1,
                TCP_STATE_ESTABLISHED => metrics.established_sockets += 1,
                _ => {}
            }
        }
    }

    Ok(metrics)
}
