//! Products API - REST server over a JSON-file product catalog

use axum_helpers::health_router;
use axum_helpers::server::{create_app, create_router};
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
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState { config };

    // Seed an empty catalog when starting against a fresh data directory
    api::init_storage(&state).await?;

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(state.config.app.clone()));

    info!(
        "Starting Products API on port {}, catalog at {}",
        state.config.server.port,
        state.config.storage.products_file.display()
    );

    create_app(app, &state.config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
