//! Payroll engine HTTP server.
//!
//! Reads configuration from `PAYROLL_CONFIG_DIR` (default
//! `./config/default`) and serves the API on the configured address.
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "PAYROLL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir).inspect_err(|err| {
        error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
    })?;

    let state = AppState::new(&config)?;
    let bind_address = config.settings().server.bind_address.clone();

    info!(
        config_dir = %config_dir,
        employees = config.employees().len(),
        report_zone = ?config.report_zone(),
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(bind_address = %bind_address, "Payroll engine listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
