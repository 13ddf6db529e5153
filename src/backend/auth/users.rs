/**
 * User Model and Credential Store
 *
 * The store contract is deliberately narrow: find by email, find by id,
 * create. Email uniqueness is enforced by the store itself at write time,
 * so the check-then-insert race in signup collapses into
 * `StoreError::DuplicateEmail` no matter which side loses.
 *
 * Two implementations are provided: `PgUserStore` for production and
 * `MemoryUserStore` for local development and tests.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::role::Role;
use crate::shared::user::PublicUser;

/// User record as persisted in the credential store.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique, stored lowercase)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Account role, fixed at signup
    pub role: Role,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Public view of this record, without the password hash.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Fields required to persist a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Credential store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already owns this email.
    #[error("email already registered")]
    DuplicateEmail,

    /// Underlying storage failure.
    #[error("store error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
        }
        StoreError::Database(err.to_string())
    }
}

/// Durable record of user credentials, keyed uniquely by email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by (lowercase) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Persist a new user. Fails with `DuplicateEmail` if the email is taken.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;
}

/// PostgreSQL-backed credential store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for `users`; role is stored as text and parsed on the way out.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, StoreError> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| StoreError::Database(format!("corrupt role column: {}", e)))?;
        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role.as_str())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }
}

/// In-memory credential store used for local development and tests.
///
/// Enforces the same email uniqueness contract as the database store.
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().unwrap();
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        // Uniqueness check and insert under one write lock, mirroring the
        // database's unique index.
        let mut users = self.users.write().unwrap();
        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Avery".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: Role::Student,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryUserStore::new();

        let created = store.create(new_user("avery@campus.edu")).await.unwrap();
        assert_eq!(created.email, "avery@campus.edu");
        assert_eq!(created.role, Role::Student);

        let by_email = store.find_by_email("avery@campus.edu").await.unwrap();
        assert_eq!(by_email.unwrap().id, created.id);

        let by_id = store.find_by_id(created.id).await.unwrap();
        assert_eq!(by_id.unwrap().email, created.email);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryUserStore::new();
        store.create(new_user("avery@campus.edu")).await.unwrap();

        let result = store.create(new_user("avery@campus.edu")).await;
        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = MemoryUserStore::new();
        assert!(store.find_by_email("nobody@campus.edu").await.unwrap().is_none());
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[test]
    fn test_to_public_drops_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Avery".to_string(),
            email: "avery@campus.edu".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Teacher,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let public = user.to_public();
        assert_eq!(public.id, user.id);
        assert_eq!(public.role, Role::Teacher);
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
