//! Application configuration.
//!
//! The backend base URL is read once at startup into an immutable [`Config`]
//! and handed to [`crate::api::RcpClient`]. Nothing mutates it afterwards;
//! pointing the client at another backend means building a new `Config`.
//!
//! | Variable           | Default | Meaning                                  |
//! |--------------------|---------|------------------------------------------|
//! | `RCP_API_BASE`     | `""`    | Backend base URL, empty for demo mode    |
//! | `RCP_TIMEOUT_SECS` | `30`    | Per-request timeout                      |
//! | `RCP_MAX_RETRIES`  | `3`     | Attempts for idempotent requests         |

use std::env;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Environment variable holding the backend base URL.
pub const API_BASE_VAR: &str = "RCP_API_BASE";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "RCP_TIMEOUT_SECS";

/// Environment variable holding the retry count for GET requests.
pub const MAX_RETRIES_VAR: &str = "RCP_MAX_RETRIES";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Backend base URL, or the empty string for demo mode.
///
/// Stored exactly as given: no trimming, no trailing-slash handling, no
/// validation. [`ApiBase::check`] exists for callers that want a syntax check,
/// but it is never run implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The demo-mode value.
    pub fn demo() -> Self {
        Self(String::new())
    }

    /// The configured string, unchanged.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no backend is configured.
    pub fn is_demo(&self) -> bool {
        self.0.is_empty()
    }

    /// Full URL for a relative API path, or `None` in demo mode.
    ///
    /// Plain concatenation: `http://localhost:8000` + `/health` gives
    /// `http://localhost:8000/health`.
    pub fn endpoint(&self, path: &str) -> Option<String> {
        if self.is_demo() {
            None
        } else {
            Some(format!("{}{}", self.0, path))
        }
    }

    /// Check that a non-empty value is an absolute URL with a host.
    pub fn check(&self) -> ConfigResult<()> {
        if self.is_demo() {
            return Ok(());
        }

        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.0.clone(),
            reason,
        };

        let url = reqwest::Url::parse(&self.0).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    api_base: ApiBase,
    timeout: Duration,
    max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: ApiBase::demo(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Config {
    /// Configuration pointing at the given base, other settings defaulted.
    pub fn new(api_base: ApiBase) -> Self {
        Self {
            api_base,
            ..Self::default()
        }
    }

    /// Load from the process environment (after a `.env` file, if present).
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load an explicit env file into the process environment, then read it.
    pub fn from_env_file(path: &Path) -> ConfigResult<Self> {
        dotenvy::from_path(path)?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// An unset `RCP_API_BASE` means demo mode.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = ApiBase::new(lookup(API_BASE_VAR).unwrap_or_default());

        let timeout_secs = parse_number(&lookup, TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)?;
        let max_retries = parse_number(&lookup, MAX_RETRIES_VAR, DEFAULT_MAX_RETRIES)?;

        Ok(Self {
            api_base,
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
        })
    }

    /// Replace the base URL. Meant for startup overrides such as a CLI flag.
    pub fn with_api_base(mut self, api_base: ApiBase) -> Self {
        self.api_base = api_base;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn is_demo(&self) -> bool {
        self.api_base.is_demo()
    }
}

fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> ConfigResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: raw,
        }),
    }
}
