//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints, organized into focused
//! submodules.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── verify.rs   - Token verification handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`verify`** - POST /api/auth/verify - Token verification
//! - **`get_me`** - GET /api/auth/me - Current user (behind the auth guard)
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name/email/password/role → user created → token returned
//! 2. **Login**: email/password → credentials verified → token returned
//! 3. **Verify**: token → signature and expiry checked → current user returned
//! 4. **Get Me**: token via middleware → current user returned

/// Request types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Token verification handler
pub mod verify;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, SignupRequest};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use signup::signup;
pub use verify::verify;
