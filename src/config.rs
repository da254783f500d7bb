//! Configuration module

use std::env;
use std::time::Duration;

/// Longest accepted polling budget (one day)
pub const MAX_POLL_TIMEOUT_SECS: u64 = 86_400;

/// Shortest accepted delay between polls
pub const MIN_POLL_INTERVAL_SECS: u64 = 1;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// VirusTotal API base URL (no trailing slash)
    pub vt_base_url: String,

    /// VirusTotal API key, sent as `x-apikey`
    pub vt_api_key: String,

    /// Total time budget for polling one analysis, in seconds
    pub poll_timeout_secs: u64,

    /// Delay between two polls, in seconds
    pub poll_interval_secs: u64,

    /// Per-call timeout for upstream requests, in seconds
    pub request_timeout_secs: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            vt_base_url: "https://www.virustotal.com/api/v3".to_string(),
            vt_api_key: String::new(),
            poll_timeout_secs: 60,
            poll_interval_secs: 3,
            request_timeout_secs: 5,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let number = |key: &str, fallback: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(fallback)
        };

        Self {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),

            vt_base_url: lookup("VT_BASEURL")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or(defaults.vt_base_url),

            vt_api_key: lookup("VT_APIKEY").unwrap_or(defaults.vt_api_key),

            poll_timeout_secs: clamp_poll_timeout(
                number("VT_POLL_TIMEOUT_SEC", defaults.poll_timeout_secs),
            ),

            poll_interval_secs: clamp_poll_interval(
                number("VT_POLL_INTERVAL_SEC", defaults.poll_interval_secs),
            ),

            request_timeout_secs: number("VT_REQUEST_TIMEOUT_SEC", defaults.request_timeout_secs),

            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn clamp_poll_timeout(secs: u64) -> u64 {
    if secs > MAX_POLL_TIMEOUT_SECS {
        tracing::warn!(
            "VT_POLL_TIMEOUT_SEC={} exceeds {}s, capping",
            secs, MAX_POLL_TIMEOUT_SECS
        );
        return MAX_POLL_TIMEOUT_SECS;
    }
    secs
}

fn clamp_poll_interval(secs: u64) -> u64 {
    if secs < MIN_POLL_INTERVAL_SECS {
        tracing::warn!(
            "VT_POLL_INTERVAL_SEC={} is below {}s, raising",
            secs, MIN_POLL_INTERVAL_SECS
        );
        return MIN_POLL_INTERVAL_SECS;
    }
    secs
}
