/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate name, password, role and the role's email rule
 * 2. Check if the email is already registered
 * 3. Hash the password using bcrypt
 * 4. Create the user in the credential store
 * 5. Generate a credential token bound to the new id and role
 * 6. Return token and user info
 *
 * Steps 1-5 live in the auth service; this handler adapts HTTP to it.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::server::state::AppState;
use crate::shared::envelope::ApiResponse;
use crate::shared::user::AuthData;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - empty name or password, unknown role, or an email
///   the requested role does not accept
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - hashing, persistence or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Avery",
///   "email": "avery@campus.edu",
///   "password": "secret1",
///   "role": "student"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<ApiResponse<AuthData>>, AuthError> {
    tracing::info!("Signup request for email: {} (role: {})", request.email, request.role);

    let (user, token) = state
        .auth
        .signup(&request.name, &request.email, &request.password, &request.role)
        .await?;

    Ok(Json(ApiResponse::ok(AuthData { user, token })))
}
