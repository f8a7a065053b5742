//! Process configuration, loaded once at startup
//!
//! Configuration is read from environment variables:
//! - `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`: store location and credentials
//! - `DB_SCHEMA`: schema bound on every session (default: library1)
//! - `SECRET_KEY`: session secret
//! - `KUTUPHANE_BIND`: listen address (default: 0.0.0.0:5002)
//! - `KUTUPHANE_CORS_PERMISSIVE`: allow any origin (default: false)

use std::fmt;
use std::net::SocketAddr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::http::ServerConfig;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_SCHEMA: &str = "library1";
const DEFAULT_BIND: &str = "0.0.0.0:5002";
const DEV_SECRET_KEY: &str = "kutuphane-dev-secret";

/// Unquoted PostgreSQL identifier, at most 63 bytes.
static SCHEMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").expect("invalid schema regex"));

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {var} is not set")]
    Missing { var: &'static str },

    #[error("environment variable {var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// A string that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Validated schema name, bound on every session via `search_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaName(String);

impl SchemaName {
    pub fn new(s: &str) -> Result<Self, ConfigError> {
        if !SCHEMA_RE.is_match(s) {
            return Err(ConfigError::Invalid {
                var: "DB_SCHEMA",
                reason: format!("'{}' is not a plain SQL identifier", s),
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted form for splicing into `SET search_path`.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl Default for SchemaName {
    fn default() -> Self {
        Self(DEFAULT_SCHEMA.to_owned())
    }
}

/// Store connection settings
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Secret,
    pub schema: SchemaName,
}

/// Everything the process needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server: ServerConfig,
    pub secret_key: Secret,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup (for testing).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| lookup(var).filter(|v| !v.trim().is_empty());
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing { var });

        let port = match get("DB_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "DB_PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_DB_PORT,
        };

        let schema = match get("DB_SCHEMA") {
            Some(raw) => SchemaName::new(raw.trim())?,
            None => SchemaName::default(),
        };

        let db = DbConfig {
            host: require("DB_HOST")?,
            port,
            database: require("DB_NAME")?,
            user: require("DB_USER")?,
            password: Secret::new(require("DB_PASSWORD")?),
            schema,
        };

        let bind_raw = get("KUTUPHANE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind_addr: SocketAddr =
            bind_raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: "KUTUPHANE_BIND",
                    reason: e.to_string(),
                }
            })?;

        let cors_permissive = match get("KUTUPHANE_CORS_PERMISSIVE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "KUTUPHANE_CORS_PERMISSIVE",
                reason: format!("expected true/false, got '{}'", raw),
            })?,
            None => false,
        };

        let secret_key = Secret::new(get("SECRET_KEY").unwrap_or_else(|| DEV_SECRET_KEY.to_owned()));

        Ok(Self {
            db,
            server: ServerConfig {
                bind_addr,
                cors_permissive,
            },
            secret_key,
        })
    }

    /// True when `SECRET_KEY` was not provided.
    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key.expose() == DEV_SECRET_KEY
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
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
        move |key| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("DB_HOST", "db.local"),
        ("DB_NAME", "kutuphane"),
        ("DB_USER", "app"),
        ("DB_PASSWORD", "hunter2"),
    ];

    #[test]
    fn defaults_applied() {
        let config = AppConfig::from_lookup(lookup(REQUIRED)).unwrap();
        assert_eq!(config.db.host, "db.local");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.schema.as_str(), "library1");
        assert_eq!(config.server.bind_addr.port(), 5002);
        assert!(!config.server.cors_permissive);
        assert!(config.uses_dev_secret());
    }

    #[test]
    fn overrides_applied() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("DB_PORT", "6543"),
            ("DB_SCHEMA", "library2"),
            ("SECRET_KEY", "s3cret"),
            ("KUTUPHANE_BIND", "127.0.0.1:8080"),
            ("KUTUPHANE_CORS_PERMISSIVE", "true"),
        ]);
        let config = AppConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.db.port, 6543);
        assert_eq!(config.db.schema.as_str(), "library2");
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:8080");
        assert!(config.server.cors_permissive);
        assert!(!config.uses_dev_secret());
    }

    #[test]
    fn missing_required_var() {
        let pairs: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "DB_PASSWORD")
            .collect();
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { var: "DB_PASSWORD" }));
    }

    #[test]
    fn blank_var_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs.retain(|(k, _)| *k != "DB_HOST");
        pairs.push(("DB_HOST", "   "));
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { var: "DB_HOST" }));
    }

    #[test]
    fn invalid_port() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("DB_PORT", "not-a-port"));
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_PORT", .. }));
    }

    #[test]
    fn schema_name_rejects_injection() {
        assert!(SchemaName::new("library1").is_ok());
        assert!(SchemaName::new("_tmp_42").is_ok());
        assert!(SchemaName::new("lib; DROP TABLE visitors").is_err());
        assert!(SchemaName::new("1library").is_err());
        assert!(SchemaName::new("").is_err());
        assert!(SchemaName::new(&"a".repeat(64)).is_err());
    }

    #[test]
    fn schema_name_quoted() {
        let schema = SchemaName::new("library1").unwrap();
        assert_eq!(schema.quoted(), "\"library1\"");
    }

    #[test]
    fn secrets_redacted_in_debug() {
        let config = AppConfig::from_lookup(lookup(REQUIRED)).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("Secret(***)"));
    }
}
