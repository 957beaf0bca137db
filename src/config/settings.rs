//! Runtime settings read from the environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://store.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Seconds a connection waits on a locked database before SQLite reports busy.
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub busy_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or("BIND_ADDR", &lookup, || {
            SocketAddr::from_str(DEFAULT_BIND_ADDR).map_err(|e| ConfigError::Load(e.to_string()))
        })?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", &lookup, || Ok(DEFAULT_MAX_CONNECTIONS))?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let busy_secs = parse_or("DB_BUSY_TIMEOUT_SECS", &lookup, || Ok(DEFAULT_BUSY_TIMEOUT_SECS))?;
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", &lookup, || Ok(DEFAULT_BODY_LIMIT_BYTES))?;

        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            busy_timeout: Duration::from_secs(busy_secs),
            body_limit_bytes,
        })
    }
}

fn parse_or<T, F, D>(key: &'static str, lookup: &F, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.bind_addr.port(), 3000);
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.busy_timeout, Duration::from_secs(5));
        assert_eq!(s.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let s = settings(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_BUSY_TIMEOUT_SECS", "1"),
        ])
        .unwrap();
        assert_eq!(s.database_url, "sqlite://other.db");
        assert_eq!(s.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(s.max_connections, 2);
        assert_eq!(s.busy_timeout, Duration::from_secs(1));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = settings(&[("DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DB_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        assert!(settings(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
    }
}
