/**
 * Server Configuration
 *
 * Configuration comes from environment variables, read once at startup.
 * The signing secret lives in `ServerConfig` for the life of the process;
 * rotating it invalidates every outstanding token.
 *
 * # Error Handling
 *
 * Configuration problems are logged but do not prevent server startup:
 * a missing database URL or a failed connection drops the server back to
 * the in-memory store so local development works without PostgreSQL.
 */

use chrono::Duration;
use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_HOURS;
use crate::backend::auth::users::{MemoryUserStore, PgUserStore, UserStore};

/// Fallback secret for local development only.
const DEV_JWT_SECRET: &str = "campusflow-dev-secret-change-in-production";

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Token signing secret
    pub jwt_secret: String,
    /// Token lifetime
    pub token_ttl: Duration,
    /// PostgreSQL connection string, if any
    pub database_url: Option<String>,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// * `JWT_SECRET` - token signing secret (dev fallback if unset)
    /// * `TOKEN_TTL_HOURS` - token lifetime in hours, default 24
    /// * `DATABASE_URL` - PostgreSQL connection string (optional)
    /// * `SERVER_PORT` - listen port, default 3000
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            DEV_JWT_SECRET.to_string()
        });

        let token_ttl_hours = std::env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS);

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            jwt_secret,
            token_ttl: Duration::hours(token_ttl_hours),
            database_url: std::env::var("DATABASE_URL").ok(),
            port,
        }
    }
}

/// Connect the credential store.
///
/// With `DATABASE_URL` set this connects PostgreSQL and runs migrations.
/// Otherwise, or when the connection fails, the server falls back to the
/// in-memory store.
pub async fn load_user_store(config: &ServerConfig) -> Arc<dyn UserStore> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Using in-memory user store.");
        return Arc::new(MemoryUserStore::new());
    };

    tracing::info!("Connecting to database...");
    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory user store.");
            return Arc::new(MemoryUserStore::new());
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Migrations might have already been run out of band
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Arc::new(PgUserStore::new(pool))
}
