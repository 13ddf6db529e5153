/**
 * Server Initialization
 *
 * Wires configuration, credential store, token signer and router into a
 * ready-to-serve Axum application.
 *
 * # Initialization Process
 *
 * 1. Load configuration from the environment
 * 2. Connect the credential store (PostgreSQL, or in-memory fallback)
 * 3. Build the token signer from the process-wide secret
 * 4. Assemble the auth service and router
 */

use axum::Router;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenSigner;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_user_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application from the environment.
pub async fn create_app() -> Router {
    let config = ServerConfig::from_env();
    create_app_with_config(&config).await
}

/// Create the application from an explicit configuration.
pub async fn create_app_with_config(config: &ServerConfig) -> Router {
    tracing::info!("Initializing CampusFlow auth server");

    let store = load_user_store(config).await;
    let signer = TokenSigner::new(&config.jwt_secret, config.token_ttl);
    let state = AppState::new(AuthService::new(store, signer));

    tracing::info!("Auth service initialized");

    create_router(state)
}
