/**
 * Authentication Middleware
 *
 * Route guards for protected endpoints. `auth_middleware` turns a Bearer
 * token into an `AuthenticatedUser` on the request; `guard_role` then
 * requires a specific role on top of it.
 *
 * Missing, malformed, invalid and expired tokens all produce the same 401
 * response; only the log lines differ. A role mismatch is the one case the
 * caller may distinguish: it is a 403, never a silent downgrade.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::error::AuthError;
use crate::backend::server::state::AppState;
use crate::shared::role::Role;
use crate::shared::user::PublicUser;

/// Authenticated user attached to request extensions by `auth_middleware`.
///
/// Holds the record re-fetched from the store during verification, so a
/// role change made after token issuance is already reflected here.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: PublicUser,
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::AuthenticationRequired
        })?;

    header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Malformed Authorization header");
        AuthError::AuthenticationRequired
    })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies signature and expiry, and re-fetches the user
/// 3. Attaches the user to request extensions for handlers and role guards
///
/// Returns 401 Unauthorized if the token is missing, malformed, invalid or
/// expired, or if the subject no longer exists.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers())?;
    let user = state.auth.verify(token).await?;

    request.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(request).await)
}

/// Role guard: require a specific role on an already-authenticated request.
///
/// Runs after `auth_middleware`, comparing the re-fetched role against the
/// route's requirement. A mismatch is a 403 authorization error, distinct
/// from the 401 authentication errors.
pub async fn guard_role(required: Role, request: Request, next: Next) -> Result<Response, AuthError> {
    let auth = request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("Role guard reached without authentication");
            AuthError::AuthenticationRequired
        })?;

    if auth.user.role != required {
        tracing::warn!(
            "Role mismatch for {}: has {}, route requires {}",
            auth.user.id,
            auth.user.role,
            required
        );
        return Err(AuthError::Forbidden { required });
    }

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user.
///
/// Use as a handler parameter on routes behind `auth_middleware` to get the
/// user the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::AuthenticationRequired
            })?;

        Ok(AuthUser(user))
    }
}
