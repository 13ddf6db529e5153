//! Authentication Module
//!
//! This module handles user registration, login, token verification and the
//! credential store behind them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and credential store
//! ├── passwords.rs    - Password hashing (bcrypt)
//! ├── sessions.rs     - Credential token issuance and verification
//! ├── service.rs      - Signup / login / verify orchestration
//! ├── error.rs        - Typed auth errors and HTTP mapping
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: user provides name, email, password and role → user
//!    created → token returned
//! 2. **Login**: user provides email and password → credentials verified
//!    against the stored hash → token returned
//! 3. **Verify**: client presents a token → signature and expiry checked →
//!    current user re-fetched and returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt with a per-record salt
//! - Tokens are stateless JWTs; the server holds no session table
//! - Tokens expire 24 hours after issuance (configurable)
//! - Invalid credentials return 401 with no information leakage
//! - Every token-class failure maps to one uniform 401 response

/// User model and credential store
pub mod users;

/// Password hashing
pub mod passwords;

/// Credential token issuance and verification
pub mod sessions;

/// Signup, login and verify orchestration
pub mod service;

/// Typed auth errors
pub mod error;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use error::AuthError;
pub use handlers::{get_me, login, signup, verify, LoginRequest, SignupRequest};
pub use service::AuthService;
pub use sessions::{Claims, TokenSigner};
pub use users::{MemoryUserStore, NewUser, PgUserStore, StoreError, User, UserStore};
