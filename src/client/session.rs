/**
 * Client Session Manager
 *
 * Owns the local session cache: an explicit object created on login or
 * signup and destroyed on logout or verify failure. Nothing else writes the
 * token or the profile, so the two can never drift apart.
 *
 * The cache is advisory; the server remains the source of truth for role
 * and validity, which `verify_auth` re-checks on app or route entry.
 */

use serde::{Deserialize, Serialize};

use crate::client::api::{AuthApi, SignupPayload};
use crate::client::error::ClientError;
use crate::client::storage::SessionStore;
use crate::shared::role::Role;
use crate::shared::user::PublicUser;

/// Cached session pairing the credential token with the last-known profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSession {
    /// Credential token attached to outgoing requests
    pub token: String,
    /// Last-known profile; refreshed on every successful verify
    pub user: PublicUser,
}

/// Client-side session manager.
pub struct SessionManager {
    api: AuthApi,
    store: Box<dyn SessionStore>,
    session: Option<ClientSession>,
}

impl SessionManager {
    pub fn new(api: AuthApi, store: Box<dyn SessionStore>) -> Self {
        Self {
            api,
            store,
            session: None,
        }
    }

    /// Load a previously persisted session into memory.
    ///
    /// The loaded profile is stale until the next `verify_auth`.
    pub fn restore(&mut self) -> Option<&ClientSession> {
        self.session = self.store.load();
        self.session.as_ref()
    }

    /// Current session, if any.
    pub fn current(&self) -> Option<&ClientSession> {
        self.session.as_ref()
    }

    /// Current profile, if any.
    pub fn current_user(&self) -> Option<&PublicUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Token for outgoing requests, if any.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Whether a session is cached locally. Advisory only; the server has
    /// the final word on the next protected request.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Log in and cache the session.
    ///
    /// A failed login leaves the cache untouched and passes the server's
    /// message through unchanged.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<PublicUser, ClientError> {
        let auth = self.api.login(email, password).await?;
        self.install(ClientSession {
            token: auth.token,
            user: auth.user.clone(),
        })?;
        Ok(auth.user)
    }

    /// Sign up and cache the session, as `login` does.
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<PublicUser, ClientError> {
        let payload = SignupPayload {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        let auth = self.api.signup(&payload).await?;
        self.install(ClientSession {
            token: auth.token,
            user: auth.user.clone(),
        })?;
        Ok(auth.user)
    }

    /// Re-check the cached token against the server.
    ///
    /// With no cached token this reports `Unauthenticated` without touching
    /// the network. On success the stored profile is refreshed, so a role
    /// change made elsewhere is picked up here. On any failure the whole
    /// session is cleared; callers should route to the login surface.
    pub async fn verify_auth(&mut self) -> Result<PublicUser, ClientError> {
        let token = match &self.session {
            Some(session) => session.token.clone(),
            None => return Err(ClientError::Unauthenticated),
        };

        match self.api.verify(&token).await {
            Ok(user) => {
                self.install(ClientSession {
                    token,
                    user: user.clone(),
                })?;
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("Session verification failed, clearing session: {}", e);
                self.destroy();
                Err(e)
            }
        }
    }

    /// Drop the session. Tokens are stateless, so there is no server call;
    /// the token simply stops being presented and ages out.
    pub fn logout(&mut self) {
        tracing::info!("Logging out, clearing session");
        self.destroy();
    }

    /// Store the session in memory and in the store as one unit.
    fn install(&mut self, session: ClientSession) -> Result<(), ClientError> {
        self.store.save(&session)?;
        self.session = Some(session);
        Ok(())
    }

    /// Clear token and profile together.
    fn destroy(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear session store: {}", e);
        }
        self.session = None;
    }
}
