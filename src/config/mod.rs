use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// HMAC key shared with the external credential store. Tokens are
    /// verified locally against this key; issuance lives with the provider.
    pub jwt_secret: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from the environment. Required variables missing
    /// at startup are a hard error; the process exits rather than limping
    /// along half-configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret =
            env::var("AUTH_JWT_SECRET").map_err(|_| ConfigError::Missing("AUTH_JWT_SECRET"))?;

        let port = match env::var("PARLEY_PORT").ok().or_else(|| env::var("PORT").ok()) {
            Some(v) => v.parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PARLEY_PORT",
                value: v,
            })?,
            None => 3000,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            database: DatabaseConfig::from_env()?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", 10)?;
        let acquire_timeout_secs = parse_or("DATABASE_ACQUIRE_TIMEOUT_SECS", 30)?;
        Ok(Self {
            max_connections,
            acquire_timeout_secs,
        })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(v) => v.parse::<T>().map_err(|_| ConfigError::Invalid { var, value: v }),
        Err(_) => Ok(default),
    }
}
