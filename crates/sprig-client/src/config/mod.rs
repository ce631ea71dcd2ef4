//! Client configuration.

use std::env;
use std::time::Duration;

/// Canonical public registry endpoint
pub const DEFAULT_API_URL: &str = "https://api.sprig-pm.dev";

/// Configuration for the registry client and its HTTP transport
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the registry API, without a trailing slash
    pub base_url: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("sprig/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Build a configuration from defaults plus environment overrides.
    ///
    /// `SPRIG_API_URL` replaces the base URL and `SPRIG_TIMEOUT_SECS` the
    /// request timeout; unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("SPRIG_API_URL") {
            if !url.is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }

        if let Ok(timeout) = env::var("SPRIG_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("sprig/"));
    }

    #[test]
    fn test_env_overrides() {
        env::set_var("SPRIG_API_URL", "http://localhost:9000/");
        env::set_var("SPRIG_TIMEOUT_SECS", "5");

        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));

        env::remove_var("SPRIG_API_URL");
        env::remove_var("SPRIG_TIMEOUT_SECS");
    }
}
