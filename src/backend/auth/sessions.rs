/**
 * Credential Tokens
 *
 * JWT issuance and verification for user sessions. Tokens carry the user id
 * and role; validity is a pure function of (token, secret, current time),
 * so the server keeps no session table. Rotating the secret invalidates
 * every outstanding token.
 *
 * Expiry is inclusive: a token checked at exactly its `exp` instant is
 * already expired. The library's own expiry validation is disabled so this
 * module owns the boundary.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::shared::role::Role;

/// Default token lifetime in hours.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Role recorded at issuance; the store stays authoritative on verify
    pub role: Role,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token issuer and verifier bound to a process-wide secret.
///
/// The keys are derived once at construction; call sites pass the current
/// time explicitly so verification stays deterministic under test.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    /// Build a signer from the shared secret and token lifetime.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        if secret.len() < 32 {
            tracing::warn!("JWT secret is shorter than 32 bytes; use a longer secret in production");
        }
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token bound to a user id and role.
    pub fn issue(&self, user_id: Uuid, role: Role, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AuthError::Internal("token encoding failed".to_string())
        })
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {:?}", e);
                AuthError::InvalidToken
            })?
            .claims;

        // Inclusive boundary: a token is expired once `now` reaches `exp`.
        if now.timestamp() >= claims.exp {
            tracing::debug!("Token expired at {} (now {})", claims.exp, now.timestamp());
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    /// Parse the subject claim back into a user id.
    pub fn subject_id(claims: &Claims) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::error!("Invalid user ID in token: {:?}", e);
            AuthError::InvalidToken
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SECRET: &str = "test-secret-key-32-characters-min!";

    fn signer() -> TokenSigner {
        TokenSigner::new(SECRET, Duration::hours(DEFAULT_TOKEN_TTL_HOURS))
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let signer = signer();
        let user_id = Uuid::new_v4();
        let now = fixed_now();

        let token = signer.issue(user_id, Role::Student, now).unwrap();
        assert!(!token.is_empty());

        let claims = signer.verify(&token, now).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, Role::Student);
        assert!(claims.exp > claims.iat);
        assert_eq!(TokenSigner::subject_id(&claims).unwrap(), user_id);
    }

    #[test]
    fn test_verify_is_idempotent() {
        let signer = signer();
        let now = fixed_now();
        let token = signer.issue(Uuid::new_v4(), Role::Teacher, now).unwrap();

        let first = signer.verify(&token, now).unwrap();
        let second = signer.verify(&token, now).unwrap();
        assert_eq!(first.sub, second.sub);
        assert_eq!(first.role, second.role);
        assert_eq!(first.exp, second.exp);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let signer = signer();
        let result = signer.verify("invalid.token.here", fixed_now());
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_foreign_signature() {
        let now = fixed_now();
        let other = TokenSigner::new("another-secret-key-32-characters!!", Duration::hours(24));
        let token = other.issue(Uuid::new_v4(), Role::Society, now).unwrap();

        let result = signer().verify(&token, now);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let signer = signer();
        let issued = fixed_now();
        let token = signer.issue(Uuid::new_v4(), Role::Student, issued).unwrap();

        // One second before expiry: still valid
        let just_before = issued + Duration::hours(24) - Duration::seconds(1);
        assert!(signer.verify(&token, just_before).is_ok());

        // Exactly at expiry: rejected
        let at_expiry = issued + Duration::hours(24);
        assert!(matches!(
            signer.verify(&token, at_expiry),
            Err(AuthError::TokenExpired)
        ));

        // Past expiry: rejected
        let after = at_expiry + Duration::seconds(1);
        assert!(matches!(
            signer.verify(&token, after),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_subject_id_rejects_non_uuid() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            role: Role::Student,
            iat: 0,
            exp: 1,
        };
        assert!(matches!(
            TokenSigner::subject_id(&claims),
            Err(AuthError::InvalidToken)
        ));
    }
}
