/**
 * Auth API Client
 *
 * HTTP client functions for the authentication and dashboard endpoints.
 * Requests attach the Bearer token when one is supplied; response envelopes
 * are unwrapped here so callers deal in domain types and `ClientError`.
 */

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::shared::envelope::ApiResponse;
use crate::shared::role::Role;
use crate::shared::user::{AuthData, PublicUser, UserData};

/// Signup payload sent to the server.
#[derive(Debug, Clone, Serialize)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Login payload sent to the server.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// HTTP client for the CampusFlow API.
#[derive(Debug, Clone)]
pub struct AuthApi {
    http: Client,
    config: ClientConfig,
}

impl AuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Register a new account.
    pub async fn signup(&self, payload: &SignupPayload) -> Result<AuthData, ClientError> {
        let response = self
            .http
            .post(self.config.api_url("/api/auth/signup"))
            .json(payload)
            .send()
            .await?;

        unwrap_envelope(response).await
    }

    /// Authenticate with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthData, ClientError> {
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.config.api_url("/api/auth/login"))
            .json(&payload)
            .send()
            .await?;

        unwrap_envelope(response).await
    }

    /// Verify a token and fetch the current profile.
    pub async fn verify(&self, token: &str) -> Result<PublicUser, ClientError> {
        let request = self.http.post(self.config.api_url("/api/auth/verify"));
        let response = attach_token(request, Some(token)).send().await?;

        let data: UserData = unwrap_envelope(response).await?;
        Ok(data.user)
    }

    /// Fetch the current profile via the guarded `me` endpoint.
    pub async fn me(&self, token: &str) -> Result<PublicUser, ClientError> {
        let request = self.http.get(self.config.api_url("/api/auth/me"));
        let response = attach_token(request, Some(token)).send().await?;

        let data: UserData = unwrap_envelope(response).await?;
        Ok(data.user)
    }

    /// Fetch a role dashboard. The server rejects tokens of any other role
    /// with a 403.
    pub async fn dashboard(&self, role: Role, token: &str) -> Result<PublicUser, ClientError> {
        let request = self.http.get(self.config.api_url(role.dashboard_path()));
        let response = attach_token(request, Some(token)).send().await?;

        let data: UserData = unwrap_envelope(response).await?;
        Ok(data.user)
    }
}

/// Attach the Bearer token when one is present. Requests without a token go
/// out bare; the server decides whether that is acceptable.
fn attach_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header("Authorization", format!("Bearer {}", token)),
        None => request,
    }
}

/// Unwrap the `{success, data, message, error}` envelope into its payload,
/// or into an `Api` error carrying the server's message unchanged.
async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    let body: ApiResponse<T> = match response.json().await {
        Ok(body) => body,
        Err(_) if !status.is_success() => {
            // Non-JSON error body (proxy, panic page); fall back to status
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: format!("Request failed: {}", status),
            });
        }
        Err(e) => return Err(ClientError::Network(e)),
    };

    match body {
        ApiResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        ApiResponse { message, .. } => Err(ClientError::Api {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| format!("Request failed: {}", status)),
        }),
    }
}
