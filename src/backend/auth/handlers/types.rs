/**
 * Authentication Handler Types
 *
 * Request types for the authentication endpoints. Responses use the shared
 * envelope and payload types from `crate::shared`.
 */

use serde::{Deserialize, Serialize};

/// Sign up request.
#[derive(Debug, Deserialize, Serialize)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Email address; must satisfy the requested role's email rule
    pub email: String,
    /// Plaintext password (hashed before storage, never echoed back)
    pub password: String,
    /// Requested role: "student", "teacher" or "society"
    pub role: String,
}

/// Login request.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Email address used at signup
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}
