//! Configuration Module
//!
//! Loads server configuration from environment variables once at startup.

use std::env;

use crate::error::ConfigError;

/// Store name used when `KV_NAMESPACE` is unset
pub const DEFAULT_NAMESPACE: &str = "CONTENT_CACHE";

/// Server configuration parameters.
#[derive(Clone)]
pub struct Config {
    /// Bearer token every `/api` request must present
    pub api_token: String,
    /// Name of the key-value store instance
    pub namespace: String,
    /// HTTP server port
    pub server_port: u16,
    /// Expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_TOKEN` - Bearer secret (required, non-empty)
    /// - `KV_NAMESPACE` - Store name (default: CONTENT_CACHE)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_token = lookup("API_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::Missing("API_TOKEN"))?;

        let namespace = lookup("KV_NAMESPACE")
            .filter(|ns| !ns.is_empty())
            .unwrap_or(defaults.namespace);

        let server_port = parse_or(&lookup, "SERVER_PORT", defaults.server_port)?;

        let cleanup_interval = parse_or(&lookup, "CLEANUP_INTERVAL", defaults.cleanup_interval)?;
        if cleanup_interval == 0 {
            return Err(ConfigError::Invalid {
                name: "CLEANUP_INTERVAL",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            api_token,
            namespace,
            server_port,
            cleanup_interval,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("namespace", &self.namespace)
            .field("server_port", &self.server_port)
            .field("cleanup_interval", &self.cleanup_interval)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[("API_TOKEN", "secret")])).unwrap();
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_TOKEN", "secret"),
            ("KV_NAMESPACE", "SESSIONS"),
            ("SERVER_PORT", "8080"),
            ("CLEANUP_INTERVAL", "5"),
        ]))
        .unwrap();
        assert_eq!(config.namespace, "SESSIONS");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cleanup_interval, 5);
    }

    #[test]
    fn test_missing_token_is_error() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])).unwrap_err(),
            ConfigError::Missing("API_TOKEN")
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[("API_TOKEN", "")])).unwrap_err(),
            ConfigError::Missing("API_TOKEN")
        );
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("API_TOKEN", "secret"),
            ("SERVER_PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "SERVER_PORT", .. }));
    }

    #[test]
    fn test_zero_cleanup_interval_is_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("API_TOKEN", "secret"),
            ("CLEANUP_INTERVAL", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "CLEANUP_INTERVAL", .. }));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_lookup(lookup_from(&[("API_TOKEN", "hunter2")])).unwrap();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
