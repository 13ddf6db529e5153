//! Shared helpers for the integration suite.
//!
//! Tests run against the real router over a fresh in-memory store, so no
//! external database is required.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use chrono::Duration;

use campusflow::backend::auth::service::AuthService;
use campusflow::backend::auth::sessions::TokenSigner;
use campusflow::backend::auth::users::MemoryUserStore;
use campusflow::backend::routes::router::create_router;
use campusflow::backend::server::state::AppState;

/// Signing secret used by every test server.
pub const TEST_SECRET: &str = "campusflow-test-secret-0123456789abcdef";

/// Application state over a fresh in-memory store.
pub fn test_state() -> AppState {
    let store = Arc::new(MemoryUserStore::new());
    let signer = TokenSigner::new(TEST_SECRET, Duration::hours(24));
    AppState::new(AuthService::new(store, signer))
}

/// Router over a fresh in-memory store.
pub fn test_router() -> Router {
    create_router(test_state())
}

/// In-process test server over a fresh in-memory store.
pub fn test_server() -> TestServer {
    TestServer::new(test_router()).unwrap()
}

/// Sign a user up through the API, returning the user payload and token.
pub async fn signup_user(
    server: &TestServer,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> (serde_json::Value, String) {
    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let token = body["data"]["token"]
        .as_str()
        .expect("token in signup response")
        .to_string();
    (body["data"]["user"].clone(), token)
}

/// `Authorization` header value for a token.
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
