//! # Unspoken
//!
//! The interactive journal client: wires configuration, telemetry, and the
//! platform adapters together, then hands control to the session loop.

mod actions;
mod config;
mod error;
mod repl;
mod state;
mod telemetry;
mod timers;

use config::AppConfig;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        settings_path = %config.settings_path.display(),
        "Starting Unspoken"
    );

    let state = AppState::new(&config).await;

    if let Err(err) = repl::run(state).await {
        tracing::error!(error = %err, "Session ended with an error");
    }
}
