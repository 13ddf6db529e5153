/**
 * Application State
 *
 * Central state container shared across request handlers. The auth service
 * sits behind an `Arc`, so cloning the state per request is a pointer copy.
 */

use std::sync::Arc;

use crate::backend::auth::service::AuthService;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service: credential store, hasher and token signer
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}
