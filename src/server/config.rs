use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Server configuration loaded from environment variables
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: SocketAddr,
    /// Endpoint receiving acceptance notices, notices are only logged when unset
    pub notify_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration using `lookup` to resolve each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr,
            notify_webhook_url: lookup("NOTIFY_WEBHOOK_URL").filter(|url| !url.is_empty()),
        })
    }
}
