// Service configuration, read from the environment (and `.env` if present)

use std::net::SocketAddr;

use chrono::Duration;
use thiserror::Error;

use crate::auth::password::DEFAULT_COST;

const DEFAULT_DATABASE_URL: &str = "sqlite://roster.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEV_JWT_SECRET: &str = "dev-secret-key";
const DEFAULT_ADMIN_TOKEN_TTL_SECS: i64 = 300;

/// Lifetime of the auth cookie and the session token inside it
pub const SESSION_TTL_HOURS: i64 = 6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub user_password: String,
    pub admin_password: String,
    pub admin_token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Loads configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            tracing::warn!("DATABASE_URL not set, using default");
            DEFAULT_DATABASE_URL.to_string()
        });

        let bind_addr: SocketAddr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            DEV_JWT_SECRET.to_string()
        });

        let user_password = lookup("USER_PASSWORD")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("USER_PASSWORD"))?;
        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?;

        let ttl_secs: i64 = parse_or(
            &lookup,
            "ADMIN_TOKEN_TTL_SECS",
            Some(DEFAULT_ADMIN_TOKEN_TTL_SECS),
        )?;
        if ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                name: "ADMIN_TOKEN_TTL_SECS",
                reason: "must be positive".to_string(),
            });
        }

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", Some(DEFAULT_COST))?;

        Ok(Self {
            database_url,
            bind_addr,
            jwt_secret,
            user_password,
            admin_password,
            admin_token_ttl: Duration::seconds(ttl_secs),
            bcrypt_cost,
        })
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &"<redacted>")
            .field("user_password", &"<redacted>")
            .field("admin_password", &"<redacted>")
            .field("admin_token_ttl", &self.admin_token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_applied_when_optional_values_missing() {
        let config = AppConfig::from_lookup(lookup(&[
            ("USER_PASSWORD", "opendoor"),
            ("ADMIN_PASSWORD", "masterkey"),
        ]))
        .expect("valid config");

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
        assert_eq!(config.admin_token_ttl, Duration::seconds(300));
        assert_eq!(config.bcrypt_cost, DEFAULT_COST);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("JWT_SECRET", "s3cret"),
            ("USER_PASSWORD", "opendoor"),
            ("ADMIN_PASSWORD", "masterkey"),
            ("ADMIN_TOKEN_TTL_SECS", "60"),
            ("BCRYPT_COST", "4"),
        ]))
        .expect("valid config");

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.admin_token_ttl, Duration::seconds(60));
        assert_eq!(config.bcrypt_cost, 4);
    }

    #[test]
    fn missing_passwords_are_errors() {
        let err = AppConfig::from_lookup(lookup(&[("ADMIN_PASSWORD", "masterkey")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("USER_PASSWORD")));

        let err = AppConfig::from_lookup(lookup(&[("USER_PASSWORD", "opendoor")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ADMIN_PASSWORD")));
    }

    #[test]
    fn invalid_numbers_are_errors() {
        let err = AppConfig::from_lookup(lookup(&[
            ("USER_PASSWORD", "opendoor"),
            ("ADMIN_PASSWORD", "masterkey"),
            ("ADMIN_TOKEN_TTL_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "ADMIN_TOKEN_TTL_SECS",
                ..
            }
        ));

        let err = AppConfig::from_lookup(lookup(&[
            ("USER_PASSWORD", "opendoor"),
            ("ADMIN_PASSWORD", "masterkey"),
            ("ADMIN_TOKEN_TTL_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = AppConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("USER_PASSWORD", "opendoor"),
            ("ADMIN_PASSWORD", "masterkey"),
        ]))
        .expect("valid config");

        let debug = format!("{:?}", config);
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("opendoor"));
        assert!(!debug.contains("masterkey"));
    }
}
