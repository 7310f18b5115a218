//! Client configuration, read from the environment.

use std::time::Duration;

pub const API_URL_VAR: &str = "ASSETDESK_API_URL";
pub const GITHUB_API_URL_VAR: &str = "ASSETDESK_GITHUB_API_URL";
pub const TIMEOUT_VAR: &str = "ASSETDESK_HTTP_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the AssetDesk REST backend.
    pub api_url: String,
    /// Base URL of the GitHub REST API (overridable for tests).
    pub github_api_url: String,
    /// Per-request timeout for both backends.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing or blank values keep the
    /// defaults; an unparseable timeout is logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(API_URL_VAR) {
            config.api_url = url;
        }
        if let Some(url) = get(GITHUB_API_URL_VAR) {
            config.github_api_url = url;
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %raw, "{TIMEOUT_VAR} is not a positive integer; using default"),
            }
        }
        config
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_github_api_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
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

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://assets.example.com/api"),
            (GITHUB_API_URL_VAR, "http://127.0.0.1:9000"),
            (TIMEOUT_VAR, "5"),
        ]));
        assert_eq!(config.api_url, "https://assets.example.com/api");
        assert_eq!(config.github_api_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_keeps_default() {
        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon"), (API_URL_VAR, "  ")]));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
