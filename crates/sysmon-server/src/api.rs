//! HTTP API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api` | GET | Host metrics merged with the current test descriptor |

use rocket::config::{Config as RocketConfig, LogLevel};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Rocket, State, get, routes};
use serde::{Deserialize, Serialize};
use sysmon_domain::MetricsSnapshot;
use sysmon_infrastructure::config::{LoggingConfig, ServerConfig};
use sysmon_infrastructure::logging::parse_log_level;
use tracing::{Level, error};

use crate::cors::Cors;
use crate::service::MetricsQueryService;

/// Body returned with a 5xx when a snapshot cannot be produced
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Composite metrics snapshot
///
/// GET /api
#[get("/api")]
pub async fn get_snapshot(
    service: &State<MetricsQueryService>,
) -> Result<Json<MetricsSnapshot>, (Status, Json<ErrorResponse>)> {
    service.snapshot().await.map(Json).map_err(|e| {
        error!(error = %e, "Failed to collect metrics snapshot");
        (
            Status::InternalServerError,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

/// Build the Rocket application serving `/api`
pub fn api_rocket(service: MetricsQueryService, cors: bool) -> Rocket<Build> {
    let rocket = rocket::build()
        .manage(service)
        .mount("/", routes![get_snapshot]);

    if cors { rocket.attach(Cors) } else { rocket }
}

/// Rocket configuration for the given server and logging settings
///
/// Fails when `server.host` is not a literal IP address.
pub fn rocket_config(
    server: &ServerConfig,
    logging: &LoggingConfig,
) -> sysmon_domain::Result<RocketConfig> {
    let address = server.address()?;

    let log_level = match parse_log_level(&logging.level) {
        Ok(level) if level == Level::TRACE || level == Level::DEBUG => LogLevel::Debug,
        Ok(level) if level == Level::INFO => LogLevel::Normal,
        _ => LogLevel::Critical,
    };

    Ok(RocketConfig {
        address,
        port: server.port,
        log_level,
        ..RocketConfig::default()
    })
}
