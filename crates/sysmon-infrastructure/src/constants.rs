//! Infrastructure layer constants
//!
//! Defaults for every configuration value live here so that the config types,
//! the loader and the tests agree on them.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sysmon.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sysmon";

/// Environment variable prefix for configuration (`SYSMON__SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "SYSMON";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// ============================================================================
// DESCRIPTOR CHANNEL CONSTANTS
// ============================================================================

/// Well-known path of the descriptor FIFO
pub const DEFAULT_CHANNEL_PATH: &str = "/tmp/stress_to_api";

/// Longest descriptor line accepted, excluding the newline
pub const MAX_DESCRIPTOR_LINE_BYTES: usize = 4096;

/// Name of the ingestion thread
pub const INGESTOR_THREAD_NAME: &str = "descriptor-ingestor";

// ============================================================================
// METRICS CONSTANTS
// ============================================================================

/// CPU sampling interval in milliseconds
pub const DEFAULT_CPU_SAMPLE_INTERVAL_MS: u64 = 1000;

/// Mount point reported in `filesystem_metrics`
pub const DEFAULT_FILESYSTEM_MOUNT_POINT: &str = "/";

/// Directory holding the kernel socket tables
pub const PROC_NET_DIR: &str = "/proc/net";

/// Kernel memory statistics
pub const PROC_MEMINFO: &str = "/proc/meminfo";

/// TCP socket tables under [`PROC_NET_DIR`]
pub const PROC_NET_TCP_TABLES: [&str; 2] = ["tcp", "tcp6"];

/// UDP socket tables under [`PROC_NET_DIR`]
pub const PROC_NET_UDP_TABLES: [&str; 2] = ["udp", "udp6"];

/// `st` column value for LISTEN in `/proc/net/tcp*`
pub const TCP_STATE_LISTEN: u8 = 0x0A;

/// `st` column value for ESTABLISHED in `/proc/net/tcp*`
pub const TCP_STATE_ESTABLISHED: u8 = 0x01;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SYSMON_LOG";

/// Log file stem used when no file name is given
pub const DEFAULT_LOG_FILE_STEM: &str = "sysmon";
