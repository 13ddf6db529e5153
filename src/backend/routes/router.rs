/**
 * Router Configuration
 *
 * Assembles the full Axum router: API routes, request tracing, CORS for the
 * browser client, and a 404 fallback.
 */

use axum::{http::StatusCode, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state holding the auth service
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(state: AppState) -> Router {
    let router = configure_api_routes(Router::new(), &state);

    router
        .layer(TraceLayer::new_for_http())
        // The web client is served from a different origin during development
        .layer(CorsLayer::permissive())
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
        .with_state(state)
}
