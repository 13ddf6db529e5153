//! Middleware Module
//!
//! HTTP middleware for the backend server. Middleware runs before requests
//! reach their handlers; this module provides the authentication and role
//! guards for protected routes.

pub mod auth;

pub use auth::{auth_middleware, bearer_token, guard_role, AuthUser, AuthenticatedUser};
