//! Shared Types
//!
//! Types used on both sides of the wire. The server serializes them into
//! responses; the client deserializes them back out of the envelope.

/// Account roles
pub mod role;

/// User profile and auth payloads
pub mod user;

/// JSON response envelope
pub mod envelope;

// Re-export commonly used types
pub use envelope::ApiResponse;
pub use role::Role;
pub use user::{AuthData, PublicUser, UserData};
