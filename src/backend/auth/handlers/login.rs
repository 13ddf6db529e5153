/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Security Notes
 *
 * - Unknown email and wrong password return the same 401 response, so the
 *   caller cannot enumerate accounts
 * - The token's role comes from the stored record, not from the request
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::server::state::AppState;
use crate::shared::envelope::ApiResponse;
use crate::shared::user::AuthData;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing email or password
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, AuthError> {
    tracing::info!("Login request for: {}", request.email);

    let (user, token) = state.auth.login(&request.email, &request.password).await?;

    Ok(Json(ApiResponse::ok(AuthData { user, token })))
}
