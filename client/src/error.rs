//! Error types for the RCP client.
//!
//! - [`ConfigError`] - Configuration loading errors
//! - [`ApiError`] - Errors from either backend (HTTP or demo)
//! - [`ClientError`] - Top-level errors returned to the CLI
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building a [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidNumber { key: String, value: String },

    /// The base URL failed an explicit check.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to load an env file.
    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

// =============================================================================
// API Errors
// =============================================================================

/// Errors from an API call, whichever backend served it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The request never completed (connection, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The request itself was rejected before being served.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            let reason = std::error::Error::source(&e)
                .map(|source| source.to_string())
                .unwrap_or_else(|| e.to_string());
            ApiError::InvalidInput(format!("cannot build request: {}", reason))
        } else if e.is_decode() {
            ApiError::InvalidResponse(e.to_string())
        } else {
            ApiError::Request(e.to_string())
        }
    }
}

// =============================================================================
// Client Errors (top-level)
// =============================================================================

/// Top-level error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// API error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for top-level operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let api_err = ApiError::NotFound("Person not found".into());
        let client_err: ClientError = api_err.into();
        assert!(client_err.to_string().contains("Person not found"));

        let cfg_err = ConfigError::InvalidNumber {
            key: "RCP_MAX_RETRIES".into(),
            value: "many".into(),
        };
        let client_err: ClientError = cfg_err.into();
        assert!(client_err.to_string().contains("RCP_MAX_RETRIES"));
    }

    #[test]
    fn test_status_error_format() {
        let err = ApiError::Status {
            status: 500,
            detail: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn test_builder_error_is_invalid_input() {
        let e = reqwest::Client::new().get("not a url/api/health").build().unwrap_err();
        match ApiError::from(e) {
            ApiError::InvalidInput(msg) => assert!(msg.contains("relative URL without a base")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
