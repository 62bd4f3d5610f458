//! API routes module

pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Seed the catalog file if it does not exist yet
pub async fn init_storage(state: &AppState) -> eyre::Result<()> {
    products::init_storage(state).await
}
