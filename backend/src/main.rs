//! Service entry-point: loads configuration, installs JSON logging and runs
//! the HTTP server until it is stopped.

mod server;

use actix_web::web;
use fitness_tracker::inbound::http::health::HealthState;
use fitness_tracker::inbound::http::session_config::{BuildMode, SessionSettings};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| {
        error!(error = %e, "invalid server configuration");
        std::io::Error::other(format!("invalid server configuration: {e}"))
    })?;
    let session = SessionSettings::from_env(&DefaultEnv::new(), BuildMode::current())
        .map_err(|e| {
            error!(error = %e, "invalid session configuration");
            std::io::Error::other(e)
        })?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings, session)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
