/**
 * Auth Error Types
 *
 * Typed errors for the auth subsystem. Kinds stay distinct internally for
 * diagnostics; at the HTTP boundary every token-class failure collapses
 * into one uniform 401 so callers cannot probe which check failed.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::backend::auth::users::StoreError;
use crate::shared::envelope::ApiResponse;
use crate::shared::role::Role;

/// Errors raised by the auth service and its route guards.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing input, user-correctable.
    #[error("{0}")]
    Validation(String),

    /// Signup conflict: the email is already registered.
    #[error("Email already registered")]
    DuplicateAccount,

    /// Login failure; never reveals whether email or password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token failed signature or structural checks.
    #[error("Invalid token")]
    InvalidToken,

    /// Token is past its expiry instant.
    #[error("Token expired")]
    TokenExpired,

    /// Token subject no longer resolves to an account.
    #[error("User no longer exists")]
    UserNotFound,

    /// No usable token on a protected request.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Valid identity, wrong role for this route.
    #[error("Access restricted to {required} accounts")]
    Forbidden { required: Role },

    /// Unexpected server-side failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateAccount => StatusCode::CONFLICT,
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::UserNotFound
            | AuthError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code for the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Validation(_) => "validation_error",
            AuthError::DuplicateAccount => "duplicate_account",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::UserNotFound
            | AuthError::AuthenticationRequired => "authentication_required",
            AuthError::Forbidden { .. } => "forbidden",
            AuthError::Internal(_) => "server_error",
        }
    }

    /// Message shown to callers. Token-class failures share one message so
    /// responses do not reveal whether a token was missing, malformed or
    /// expired; the log line keeps the distinction.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::UserNotFound
            | AuthError::AuthenticationRequired => "Authentication required".to_string(),
            AuthError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AuthError::DuplicateAccount,
            StoreError::Database(message) => AuthError::Internal(message),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = ApiResponse::<()>::failure(self.public_message(), self.code());
        (status, Json(body)).into_response()
    }
}
