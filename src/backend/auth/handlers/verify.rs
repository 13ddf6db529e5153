/**
 * Verify Handler
 *
 * This module implements the token verification handler for
 * POST /api/auth/verify. Clients call it on app or route entry to confirm
 * a cached token is still good and to refresh the cached profile.
 *
 * The returned profile is re-fetched from the store, so a role change made
 * after the token was issued is visible here even though the token itself
 * still carries the old role.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::backend::auth::error::AuthError;
use crate::backend::middleware::auth::bearer_token;
use crate::backend::server::state::AppState;
use crate::shared::envelope::ApiResponse;
use crate::shared::user::UserData;

/// Verify handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing header, malformed header, bad signature,
///   expired token, or a subject that no longer exists (one uniform
///   response for all of these)
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserData>>, AuthError> {
    let token = bearer_token(&headers)?;
    let user = state.auth.verify(token).await?;

    Ok(Json(ApiResponse::ok(UserData { user })))
}
