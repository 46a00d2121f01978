//! Server Initialization
//!
//! Startup order: configuration, logging, descriptor channel, ingestor thread,
//! then the HTTP server. A channel that cannot be created aborts startup.

use std::path::Path;
use std::sync::Arc;

use sysmon_domain::MetricsSource;
use sysmon_domain::error::Result;
use sysmon_infrastructure::channel::{ChannelStatus, ensure_channel};
use sysmon_infrastructure::config::{AppConfig, ChannelConfig, ConfigLoader};
use sysmon_infrastructure::logging::{init_logging, log_config_loaded};
use sysmon_infrastructure::{DescriptorCell, DescriptorIngestor, HostMetricsSource, IngestorHandle};
use tracing::info;

use crate::api::{api_rocket, rocket_config};
use crate::service::MetricsQueryService;

/// Run the sysmon server until Rocket shuts down
///
/// The ingestor thread is detached and does not delay process exit.
pub async fn run(config_path: Option<&Path>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let loader = config_loader(config_path);
    let config = loader.load()?;
    let launch_config = rocket_config(&config.server, &config.logging)?;
    init_logging(config.logging.clone())?;

    if let Some(path) = loader.resolved_config_path() {
        log_config_loaded(&path, path.exists());
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        channel = %config.channel.path.display(),
        "Starting sysmon"
    );

    let descriptor = Arc::new(DescriptorCell::new());
    let _ingestor = start_ingestor(&config.channel, Arc::clone(&descriptor))?;

    let metrics: Arc<dyn MetricsSource> = Arc::new(HostMetricsSource::new(&config.metrics));
    let service = MetricsQueryService::new(descriptor, metrics);

    api_rocket(service, config.server.cors)
        .configure(launch_config)
        .launch()
        .await?;

    Ok(())
}

/// Load configuration from `config_path`, default locations and the environment
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    config_loader(config_path).load()
}

fn config_loader(config_path: Option<&Path>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Write the configuration `run` would use to `output` as TOML
pub fn write_config(config_path: Option<&Path>, output: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    ConfigLoader::new().save_to_file(&config, output)
}

/// Ensure the channel exists and start ingesting descriptors into `cell`
pub fn start_ingestor(channel: &ChannelConfig, cell: Arc<DescriptorCell>) -> Result<IngestorHandle> {
    if ensure_channel(&channel.path)? == ChannelStatus::Existing {
        info!(path = %channel.path.display(), "Using existing descriptor channel");
    }
    DescriptorIngestor::new(channel, cell).spawn()
}
