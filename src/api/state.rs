use std::sync::Arc;

use axum::extract::FromRef;
use chrono::Duration;
use sqlx::SqlitePool;

use crate::auth::Credentials;
use crate::config::{AppConfig, SESSION_TTL_HOURS};

/// Secrets and lifetimes used by the authorization gate
#[derive(Debug)]
pub struct AuthSettings {
    pub credentials: Credentials,
    pub jwt_secret: String,
    pub session_ttl: Duration,
    pub admin_token_ttl: Duration,
}

impl AuthSettings {
    /// Hashes the configured passwords (blocking: bcrypt)
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        let credentials = Credentials::from_plaintext(
            &config.user_password,
            &config.admin_password,
            config.bcrypt_cost,
        )?;

        Ok(Self {
            credentials,
            jwt_secret: config.jwt_secret.clone(),
            session_ttl: Duration::hours(SESSION_TTL_HOURS),
            admin_token_ttl: config.admin_token_ttl,
        })
    }
}

/// Router state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth: AuthSettings) -> Self {
        Self {
            pool,
            auth: Arc::new(auth),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<AuthSettings> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
