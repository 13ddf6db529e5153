//! Client Module
//!
//! HTTP client and session management for applications talking to the
//! CampusFlow API.
//!
//! # Architecture
//!
//! - **`config`** - Server URL configuration
//! - **`api`** - Auth API client; attaches Bearer tokens to requests
//! - **`session`** - Session manager owning the token + profile cache
//! - **`storage`** - Pluggable session persistence (file or in-memory)
//! - **`error`** - Client error types
//!
//! The session manager is the only writer of the local cache: it installs
//! the token and profile together on login/signup and clears them together
//! on logout or verify failure.

/// Client configuration
pub mod config;

/// Auth API HTTP client
pub mod api;

/// Session manager
pub mod session;

/// Session persistence
pub mod storage;

/// Client error types
pub mod error;

// Re-export commonly used types
pub use api::{AuthApi, LoginPayload, SignupPayload};
pub use config::ClientConfig;
pub use error::ClientError;
pub use session::{ClientSession, SessionManager};
pub use storage::{FileSessionStore, MemorySessionStore, SessionStore};
