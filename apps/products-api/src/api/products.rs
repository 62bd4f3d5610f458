//! Products API routes

use axum::Router;
use axum_helpers::auth::BasicAuth;
use domain_products::{handlers, JsonFileProductRepository, ProductService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = JsonFileProductRepository::new(state.config.storage.products_file.clone());
    let service = ProductService::new(repository);
    let auth = BasicAuth::from_config(&state.config.auth);
    handlers::router(service, auth)
}

/// Seed an empty catalog when the configured file is missing
pub async fn init_storage(state: &AppState) -> eyre::Result<()> {
    let repository = JsonFileProductRepository::new(state.config.storage.products_file.clone());
    repository.ensure_exists().await?;
    Ok(())
}
