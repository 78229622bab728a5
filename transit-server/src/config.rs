//! Process configuration.
//!
//! Everything comes from environment variables. Loading goes through a
//! lookup function so tests can supply values without touching the real
//! environment.

use std::net::SocketAddr;

use tracing::warn;

use crate::navitia::NavitiaConfig;

/// API key for the PRIM marketplace.
pub const API_KEY_VAR: &str = "PRIM_API_KEY";

/// Optional override of the Navitia service root.
pub const BASE_URL_VAR: &str = "NAVITIA_BASE_URL";

/// Optional request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "NAVITIA_TIMEOUT_SECS";

/// Optional listen address for the JSON server.
pub const ADDR_VAR: &str = "TRANSIT_SERVER_ADDR";

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub navitia: NavitiaConfig,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// A missing API key is not an error: the server still starts, and
    /// the upstream rejects each call.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR).unwrap_or_else(|| {
            warn!("{API_KEY_VAR} not set. API calls will fail.");
            String::new()
        });

        let mut navitia = NavitiaConfig::new(api_key);
        if let Some(url) = lookup(BASE_URL_VAR) {
            navitia = navitia.with_base_url(url);
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError {
                var: TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            navitia = navitia.with_timeout(secs);
        }

        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr.trim().parse::<SocketAddr>().map_err(|_| ConfigError {
            var: ADDR_VAR,
            value: addr.clone(),
        })?;

        Ok(Self { navitia, bind_addr })
    }
}
