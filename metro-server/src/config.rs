//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Network file read when `METRO_NETWORK_CSV` is unset.
pub const DEFAULT_NETWORK_PATH: &str = "Metrolink_times_linecolour.csv";

/// Listen address used when `METRO_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

pub const NETWORK_PATH_VAR: &str = "METRO_NETWORK_CSV";
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";
pub const CHANGE_MINS_VAR: &str = "METRO_CHANGE_MINS";

/// Error returned for an unusable configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration for the web server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Comma-separated network file to load at startup.
    pub network_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Route search parameters.
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network_path = lookup(NETWORK_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NETWORK_PATH));

        let bind_addr: SocketAddr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError {
                key: BIND_ADDR_VAR,
                value,
                reason: "expected host:port",
            })?,
            None => default_bind_addr(),
        };

        let search = match lookup(CHANGE_MINS_VAR) {
            Some(value) => {
                let config = value
                    .trim()
                    .parse()
                    .map(SearchConfig::new)
                    .map_err(|_| ConfigError {
                        key: CHANGE_MINS_VAR,
                        value: value.clone(),
                        reason: "expected a number of minutes",
                    })?;
                if !config.is_valid() {
                    return Err(ConfigError {
                        key: CHANGE_MINS_VAR,
                        value,
                        reason: "must be finite and not negative",
                    });
                }
                config
            }
            None => SearchConfig::default(),
        };

        Ok(Self {
            network_path,
            bind_addr,
            search,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from(DEFAULT_NETWORK_PATH),
            bind_addr: default_bind_addr(),
            search: SearchConfig::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.network_path, PathBuf::from(DEFAULT_NETWORK_PATH));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.search.change_time(), 2.0);
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            (NETWORK_PATH_VAR, "/data/trams.csv"),
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (CHANGE_MINS_VAR, "3.5"),
        ])
        .unwrap();

        assert_eq!(config.network_path, PathBuf::from("/data/trams.csv"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.search.change_time(), 3.5);
    }

    #[test]
    fn blank_path_uses_default() {
        let config = config(&[(NETWORK_PATH_VAR, "  ")]).unwrap();
        assert_eq!(config.network_path, PathBuf::from(DEFAULT_NETWORK_PATH));
    }

    #[test]
    fn rejects_bad_address() {
        let err = config(&[(BIND_ADDR_VAR, "localhost")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid METRO_BIND_ADDR=\"localhost\": expected host:port"
        );
    }

    #[test]
    fn rejects_bad_change_time() {
        let err = config(&[(CHANGE_MINS_VAR, "two")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid METRO_CHANGE_MINS=\"two\": expected a number of minutes"
        );

        let err = config(&[(CHANGE_MINS_VAR, "-1")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid METRO_CHANGE_MINS=\"-1\": must be finite and not negative"
        );
    }
}
