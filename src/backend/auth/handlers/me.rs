/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the currently authenticated user. The route sits behind the auth
 * middleware, so by the time this handler runs the token has already been
 * verified and the user re-fetched.
 */

use axum::response::Json;

use crate::backend::middleware::auth::AuthUser;
use crate::shared::envelope::ApiResponse;
use crate::shared::user::UserData;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - rejected by the auth middleware before this
///   handler runs
pub async fn get_me(AuthUser(auth): AuthUser) -> Json<ApiResponse<UserData>> {
    tracing::debug!("Current user request for {}", auth.user.id);

    Json(ApiResponse::ok(UserData { user: auth.user }))
}
