use std::time::Duration;

use crate::retry::RetryPolicy;

/// Base URL used when `MYWEDDING_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Errors raised while reading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// API client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `https://api.mywedding.lk`.
    pub base_url: String,
    /// Per-request timeout. `None` means requests may wait indefinitely.
    pub request_timeout: Option<Duration>,
    /// Retry policy for idempotent `GET` requests.
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Configuration for `base_url` with default retry and no timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            request_timeout: None,
            retry: RetryPolicy::default(),
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                            | Default                 |
    /// |------------------------------------|-------------------------|
    /// | `MYWEDDING_API_BASE_URL`           | `http://localhost:8080` |
    /// | `MYWEDDING_REQUEST_TIMEOUT_SECS`   | unset (no timeout)      |
    /// | `MYWEDDING_GET_MAX_ATTEMPTS`       | `3`                     |
    /// | `MYWEDDING_RETRY_INITIAL_DELAY_MS` | `250`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("MYWEDDING_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "MYWEDDING_API_BASE_URL",
                value: base_url,
                reason: "must start with http:// or https://".into(),
            });
        }

        let request_timeout = parse_var::<u64, _>(&lookup, "MYWEDDING_REQUEST_TIMEOUT_SECS")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let defaults = RetryPolicy::default();
        let max_attempts = parse_var::<u32, _>(&lookup, "MYWEDDING_GET_MAX_ATTEMPTS")?
            .unwrap_or(defaults.max_attempts);
        if max_attempts == 0 {
            return Err(ConfigError::Invalid {
                var: "MYWEDDING_GET_MAX_ATTEMPTS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        let initial_delay = parse_var::<u64, _>(&lookup, "MYWEDDING_RETRY_INITIAL_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.initial_delay);

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            request_timeout,
            retry: RetryPolicy {
                max_attempts,
                initial_delay,
                ..defaults
            },
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                var,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
