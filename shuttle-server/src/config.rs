//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Address the server binds to.
pub const BIND_ADDR_VAR: &str = "SHUTTLE_BIND_ADDR";
/// Google Maps API key. Absent or empty disables external estimates.
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
/// Optional JSON catalog replacing the built-in network.
pub const NETWORK_PATH_VAR: &str = "SHUTTLE_NETWORK_PATH";
/// Directions cache TTL in minutes.
pub const CACHE_MINUTES_VAR: &str = "DIRECTIONS_CACHE_MINUTES";
/// Directions request timeout in seconds.
pub const TIMEOUT_SECS_VAR: &str = "DIRECTIONS_TIMEOUT_SECS";

const DEFAULT_CACHE_MINUTES: u64 = 30;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub api_key: Option<String>,
    pub network_path: Option<PathBuf>,
    pub cache_ttl: Duration,
    pub directions_timeout_secs: u64,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = parse_or(BIND_ADDR_VAR, get(BIND_ADDR_VAR), || {
            SocketAddr::from(([127, 0, 0, 1], 3000))
        })?;
        let cache_minutes: u64 =
            parse_or(CACHE_MINUTES_VAR, get(CACHE_MINUTES_VAR), || DEFAULT_CACHE_MINUTES)?;
        let directions_timeout_secs: u64 =
            parse_or(TIMEOUT_SECS_VAR, get(TIMEOUT_SECS_VAR), || DEFAULT_TIMEOUT_SECS)?;

        if directions_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: TIMEOUT_SECS_VAR,
                value: "0".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            api_key: get(API_KEY_VAR),
            network_path: get(NETWORK_PATH_VAR).map(PathBuf::from),
            cache_ttl: Duration::from_secs(cache_minutes * 60),
            directions_timeout_secs,
        })
    }

    /// Returns true if external estimators should be used.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api_key: None,
            network_path: None,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_MINUTES * 60),
            directions_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn parse_or<T, D>(key: &'static str, value: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    D: FnOnce() -> T,
{
    match value {
        None => Ok(default()),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}
