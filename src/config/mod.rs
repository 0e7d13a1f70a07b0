//! Configuration module for the Repair Hub client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Repair Hub backend API (including any path prefix)
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Log level (trace, debug, info, warn, error). The library installs no
    /// subscriber itself; the embedding binary feeds this to its
    /// tracing-subscriber filter, as the test fixture does.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("HUB_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000/api".to_string());

        let request_timeout = env::var("HUB_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        let log_level = env::var("HUB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_base_url,
            request_timeout,
            log_level,
        }
    }

    /// Build a configuration pointing at the given base URL, with defaults
    /// for everything else. Used by tests and embedding applications.
    pub fn for_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout: Duration::from_secs(30),
            log_level: "info".to_string(),
        }
    }
}
