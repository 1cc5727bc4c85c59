use axum_helpers::{create_app, cors_layer_from_env};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // CORS is only enabled when CORS_ALLOWED_ORIGIN is set
    let cors = cors_layer_from_env(config.api_key.header().clone())?;
    if cors.is_none() {
        info!("CORS_ALLOWED_ORIGIN not set, CORS layer disabled");
    }

    let state = AppState::new(config);

    // Greeting, health, docs and /api routes behind the shared middleware stack
    let app = api::app(&state, cors);

    info!(
        app_name = state.config.app.name,
        version = state.config.app.version,
        "Starting catalog API"
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
