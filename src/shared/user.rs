/**
 * Shared User Types
 *
 * Wire-level user representations shared by the server and the client.
 * The password hash never appears in any of these types.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::role::Role;

/// User profile safe to return to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique per account, stored lowercase)
    pub email: String,
    /// Account role
    pub role: Role,
}

/// Payload returned by signup and login: the profile plus a fresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    /// User profile
    pub user: PublicUser,
    /// Credential token for subsequent requests
    pub token: String,
}

/// Payload returned by verify, me and the dashboard endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    /// Current user profile, re-fetched from the store
    pub user: PublicUser,
}
