/**
 * Auth Service
 *
 * Orchestrates signup, login and verify over the credential store, the
 * password hasher and the token signer. Handlers stay thin HTTP adapters;
 * every rule about who may authenticate lives here.
 */

use chrono::Utc;
use std::sync::Arc;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::passwords::{hash_password, verify_password};
use crate::backend::auth::sessions::TokenSigner;
use crate::backend::auth::users::{NewUser, UserStore};
use crate::shared::role::Role;
use crate::shared::user::PublicUser;

/// Authentication service shared across request handlers.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    signer: TokenSigner,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, signer: TokenSigner) -> Self {
        Self { store, signer }
    }

    /// Register a new account and mint its first token.
    ///
    /// The email must satisfy the role's email rule and be unused. The
    /// store's unique index has the final word on uniqueness, so the race
    /// between the pre-check and the insert still surfaces as
    /// `DuplicateAccount`.
    ///
    /// # Errors
    ///
    /// * `Validation` - empty name or password, unknown role, or an email
    ///   the role does not accept
    /// * `DuplicateAccount` - the email is already registered
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<(PublicUser, String), AuthError> {
        let role: Role = role.parse().map_err(|_| {
            AuthError::Validation("Role must be one of student, teacher or society".to_string())
        })?;
        if name.trim().is_empty() {
            return Err(AuthError::Validation("Please provide a name".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("Please provide a password".to_string()));
        }

        let email = normalize_email(email);
        validate_email_for_role(&email, role)?;

        // Pre-check before paying for the hash; the unique index still
        // decides under concurrent signups.
        if self.store.find_by_email(&email).await?.is_some() {
            tracing::warn!("Signup rejected, email already exists: {}", email);
            return Err(AuthError::DuplicateAccount);
        }

        let password_hash = hash_password(password)?;
        let user = self
            .store
            .create(NewUser {
                name: name.trim().to_string(),
                email,
                password_hash,
                role,
            })
            .await?;

        let token = self.signer.issue(user.id, user.role, Utc::now())?;
        tracing::info!("User created: {} ({}, {})", user.name, user.email, user.role);

        Ok((user.to_public(), token))
    }

    /// Authenticate an existing account.
    ///
    /// Unknown email and wrong password return the same error so responses
    /// do not reveal which field was wrong. The token's role comes from the
    /// stored record, never from client input.
    pub async fn login(&self, email: &str, password: &str) -> Result<(PublicUser, String), AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Please provide email and password".to_string(),
            ));
        }
        let email = normalize_email(email);

        let user = match self.store.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                tracing::warn!("Login failed, no account for: {}", email);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!("Login failed, wrong password for: {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.signer.issue(user.id, user.role, Utc::now())?;
        tracing::info!("User logged in: {} ({})", user.name, user.email);

        Ok((user.to_public(), token))
    }

    /// Resolve a token to the current user record.
    ///
    /// The token is stale data; re-fetching the subject means role changes
    /// and removed accounts are observed on the next protected request.
    pub async fn verify(&self, token: &str) -> Result<PublicUser, AuthError> {
        let claims = self.signer.verify(token, Utc::now())?;
        let user_id = TokenSigner::subject_id(&claims)?;

        let user = self.store.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", user_id);
            AuthError::UserNotFound
        })?;

        Ok(user.to_public())
    }
}

/// Lowercase the address; emails are unique case-insensitively.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Role-specific email rules.
///
/// Student and teacher accounts must use an institutional address; society
/// accounts accept any well-formed one.
fn validate_email_for_role(email: &str, role: Role) -> Result<(), AuthError> {
    let domain = match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => domain,
        _ => return Err(AuthError::Validation("Invalid email format".to_string())),
    };

    match role {
        Role::Student | Role::Teacher => {
            let institutional = domain.ends_with(".edu")
                || domain.contains(".edu.")
                || domain.contains(".ac.");
            if institutional {
                Ok(())
            } else {
                Err(AuthError::Validation(format!(
                    "A {} account requires an institutional email address",
                    role
                )))
            }
        }
        Role::Society => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_HOURS;
    use crate::backend::auth::users::MemoryUserStore;
    use chrono::Duration;
    use uuid::Uuid;

    const SECRET: &str = "test-secret-key-32-characters-min!";

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(MemoryUserStore::new()),
            TokenSigner::new(SECRET, Duration::hours(DEFAULT_TOKEN_TTL_HOURS)),
        )
    }

    #[tokio::test]
    async fn test_signup_success() {
        let service = service();
        let (user, token) = service
            .signup("Avery", "avery@campus.edu", "secret1", "student")
            .await
            .unwrap();

        assert_eq!(user.name, "Avery");
        assert_eq!(user.email, "avery@campus.edu");
        assert_eq!(user.role, Role::Student);
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_signup_normalizes_email() {
        let service = service();
        let (user, _) = service
            .signup("Avery", "  Avery@Campus.EDU ", "secret1", "student")
            .await
            .unwrap();
        assert_eq!(user.email, "avery@campus.edu");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let service = service();
        service
            .signup("Avery", "avery@campus.edu", "secret1", "student")
            .await
            .unwrap();

        let result = service
            .signup("Avery Two", "avery@campus.edu", "other-password", "teacher")
            .await;
        assert!(matches!(result, Err(AuthError::DuplicateAccount)));

        // Case only differs: still the same account
        let result = service
            .signup("Avery Three", "AVERY@CAMPUS.EDU", "secret1", "student")
            .await;
        assert!(matches!(result, Err(AuthError::DuplicateAccount)));
    }

    #[tokio::test]
    async fn test_signup_rejects_unknown_role() {
        let result = service()
            .signup("Avery", "avery@campus.edu", "secret1", "admin")
            .await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_signup_rejects_empty_fields() {
        let service = service();
        assert!(matches!(
            service.signup("", "avery@campus.edu", "secret1", "student").await,
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            service.signup("Avery", "avery@campus.edu", "", "student").await,
            Err(AuthError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_role_email_rules() {
        let service = service();

        // Students and teachers need an institutional domain
        assert!(matches!(
            service.signup("Avery", "avery@gmail.com", "secret1", "student").await,
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            service.signup("Blake", "blake@gmail.com", "secret1", "teacher").await,
            Err(AuthError::Validation(_))
        ));

        // Societies accept any well-formed address
        let (user, _) = service
            .signup("Robotics Club", "robotics@gmail.com", "secret1", "society")
            .await
            .unwrap();
        assert_eq!(user.role, Role::Society);

        // ac.* domains count as institutional
        let (user, _) = service
            .signup("Morgan", "morgan@college.ac.uk", "secret1", "teacher")
            .await
            .unwrap();
        assert_eq!(user.role, Role::Teacher);
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = service();
        service
            .signup("Avery", "avery@campus.edu", "secret1", "student")
            .await
            .unwrap();

        let (user, token) = service.login("avery@campus.edu", "secret1").await.unwrap();
        assert_eq!(user.name, "Avery");
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let service = service();
        service
            .signup("Avery", "avery@campus.edu", "secret1", "student")
            .await
            .unwrap();

        // Wrong password, one character changed
        let wrong_password = service.login("avery@campus.edu", "secret2").await.unwrap_err();
        // Unknown email entirely
        let unknown_email = service.login("nobody@campus.edu", "secret1").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.public_message(), unknown_email.public_message());
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let result = service().login("avery@campus.edu", "").await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_verify_round_trip() {
        let service = service();
        let (user, token) = service
            .signup("Avery", "avery@campus.edu", "secret1", "student")
            .await
            .unwrap();

        let verified = service.verify(&token).await.unwrap();
        assert_eq!(verified.id, user.id);
        assert_eq!(verified.role, user.role);

        // Same token, same answer
        let again = service.verify(&token).await.unwrap();
        assert_eq!(again.id, verified.id);
        assert_eq!(again.role, verified.role);
    }

    #[tokio::test]
    async fn test_verify_unknown_subject() {
        let service = service();
        // Token signed with the right secret but for a user that was never
        // created in this store
        let foreign = TokenSigner::new(SECRET, Duration::hours(24));
        let token = foreign.issue(Uuid::new_v4(), Role::Student, Utc::now()).unwrap();

        let result = service.verify(&token).await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_token() {
        let result = service().verify("not-a-token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
