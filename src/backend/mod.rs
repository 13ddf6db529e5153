//! Backend Module
//!
//! Server-side code for the CampusFlow platform: an Axum HTTP server that
//! issues credential tokens, verifies them on protected requests, and gates
//! the dashboard routes by role.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, tokens, auth service
//! - **`middleware`** - Authentication middleware and role guards
//! - **`dashboard`** - Role-gated dashboard endpoints
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request guards
//! └── dashboard/      - Role-gated endpoints
//! ```
//!
//! # Concurrency
//!
//! Each request is an independent unit of work. The only shared state is
//! the credential store (its own synchronization) and the token signer
//! (read-only after startup), so handlers need no additional locking.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, AuthError>`; the error's `IntoResponse`
//! implementation maps authentication failures to a uniform 401, role
//! mismatches to 403, and renders the shared response envelope.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Role-gated dashboard endpoints
pub mod dashboard;

// Re-export commonly used types
pub use auth::{AuthError, AuthService};
pub use middleware::{auth_middleware, AuthUser, AuthenticatedUser};
pub use routes::create_router;
pub use server::{create_app, AppState};
