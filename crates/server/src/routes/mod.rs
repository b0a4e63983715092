pub mod health;
pub mod profiles;

use axum::{Router, routing::get};
use rolodex_store::ProfileStore;
use tower_http::cors::CorsLayer;

/// Assembles the full application router around one shared store.
///
/// The CORS layer is permissive because the presentation front-end is served
/// from a separate origin.
pub fn router(store: ProfileStore) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", profiles::router())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
