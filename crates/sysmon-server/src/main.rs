//! sysmon - host metrics and current stress test over HTTP

use clap::Parser;
use sysmon_server::init::write_config;
use sysmon_server::run;

/// Command line interface for sysmon
#[derive(Parser, Debug)]
#[command(name = "sysmon")]
#[command(about = "Serve host metrics and the current stress test over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Write the effective configuration as TOML to this path and exit
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Some(path) = &cli.write_config {
        write_config(cli.config.as_deref(), path)?;
        return Ok(());
    }
    run(cli.config.as_deref()).await
}
