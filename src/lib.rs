//! CampusFlow - Main Library
//!
//! CampusFlow is a role-based campus engagement platform for student,
//! teacher and society accounts, backed by a token-authenticated JSON API.
//! This crate implements both halves of its authentication subsystem.
//!
//! # Overview
//!
//! The library provides:
//! - Stateless credential tokens (JWT) bound to a user id and role
//! - Signup, login and verify endpoints over a narrow credential store
//! - Role-gated route guards for the dashboard APIs
//! - A client-side session manager that caches the token and profile
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the server and the client
//!   - Role enum, user profiles, response envelope
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server with auth and dashboard handlers
//!   - Credential store (PostgreSQL or in-memory), password hashing
//!   - Token issuance/verification and role guard middleware
//!
//! - **`client`** - HTTP client and session management
//!   - Auth API client attaching Bearer tokens to outgoing requests
//!   - Session manager owning the local token + profile cache
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server
//!   binary. Disable it for client-only builds.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use campusflow::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with an Axum server
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use campusflow::client::{AuthApi, ClientConfig, MemorySessionStore, SessionManager};
//!
//! # async fn example() -> Result<(), campusflow::client::ClientError> {
//! let api = AuthApi::new(ClientConfig::new());
//! let mut session = SessionManager::new(api, Box::new(MemorySessionStore::new()));
//! session.login("avery@campus.edu", "secret1").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - Typed errors in `backend::auth::error` and `client::error`
//! - `?` propagation; failures either reach the caller or trigger the
//!   documented session-clear side effect on the client

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client HTTP API and session management
pub mod client;
