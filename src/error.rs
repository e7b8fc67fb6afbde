//! Error types for the Wordkeep CLI

use thiserror::Error;

/// Result type alias for Wordkeep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for token, bridge and API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised by the authentication service, the token bridge and
/// protected API calls.
///
/// `Clone` so a single refresh outcome can be handed to every caller that
/// awaited it.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Login failed (HTTP {status}). Check your email and password.")]
    Authentication { status: u16 },

    #[error("Authentication service returned an invalid expiry timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Session expired and could not be refreshed: {0}. Please log in again.")]
    Refresh(String),

    #[error("Request failed (HTTP {status}): {message}")]
    Request { status: u16, message: String },

    #[error("Access token unavailable: {0}. Please log in again.")]
    TokenUnavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Refusing to send credentials to {0}: not the configured service host")]
    ForeignHost(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Whether the user has to authenticate again before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            ApiError::Authentication { .. } | ApiError::Refresh(_) | ApiError::TokenUnavailable(_)
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("No email configured. Pass --email or run `wordkeep config set-email <EMAIL>`.")]
    MissingEmail,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_error_carries_status() {
        let err = ApiError::Authentication { status: 401 };
        assert!(err.to_string().contains("401"));
        assert!(err.requires_login());
    }

    #[test]
    fn test_refresh_error_tells_user_to_log_in() {
        let err = ApiError::Refresh("HTTP 403".to_string());
        let msg = err.to_string();
        assert!(msg.contains("HTTP 403"));
        assert!(msg.contains("log in again"));
        assert!(err.requires_login());
    }

    #[test]
    fn test_request_error_is_distinct_from_refresh() {
        let err = ApiError::Request {
            status: 500,
            message: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
        assert!(!msg.contains("log in"));
        assert!(!err.requires_login());
    }

    #[test]
    fn test_token_unavailable_message() {
        let err = ApiError::TokenUnavailable("bridge timed out".to_string());
        assert!(err.to_string().contains("bridge timed out"));
    }

    #[test]
    fn test_invalid_timestamp_message() {
        let err = ApiError::InvalidTimestamp("2030-01-01T00:00:00".to_string());
        assert!(err.to_string().contains("2030-01-01T00:00:00"));
    }

    #[test]
    fn test_network_error() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_config_error_missing_email() {
        let err = ConfigError::MissingEmail;
        assert!(err.to_string().contains("--email"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Authentication { status: 401 }.into();

        match err {
            Error::Api(ApiError::Authentication { status: 401 }) => (),
            _ => panic!("Expected Error::Api(ApiError::Authentication)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
