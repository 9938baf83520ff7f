//! Error types for the Slack client.
//!
//! Two tiers of failure: transport-level errors (network, malformed
//! responses) surfaced unchanged, and application-level errors signaled by
//! the response envelope's `ok: false` flag, carried verbatim as
//! [`SlackError::Api`].

use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for Slack operations
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Application-level error reported by the Slack API envelope
    #[error("Slack API error: {code}")]
    Api {
        /// The error string from the response envelope, verbatim
        code: String,
    },
}

impl SlackError {
    /// Create an API error from an envelope error string
    pub fn api(code: impl Into<String>) -> Self {
        Self::Api { code: code.into() }
    }

    /// The remote error string, if this is an application-level error
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code } => Some(code),
            _ => None,
        }
    }

    /// Whether the failure happened before a valid envelope was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Response(_))
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing token
    #[error("API token is missing")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token format: {0}")]
    InvalidToken(String),

    /// Invalid base URL
    #[error("Invalid base URL: {message}")]
    InvalidBaseUrl {
        /// Error message
        message: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// Error message
        message: String,
    },

    /// Unexpected response shape
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::Deserialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_code_verbatim() {
        let err = SlackError::api("channel_not_found");
        assert_eq!(err.api_code(), Some("channel_not_found"));
        assert_eq!(err.to_string(), "Slack API error: channel_not_found");
    }

    #[test]
    fn test_transport_tier() {
        assert!(SlackError::Network(NetworkError::Timeout).is_transport());
        assert!(SlackError::Response(ResponseError::Deserialization {
            message: "bad json".to_string()
        })
        .is_transport());
        assert!(!SlackError::api("invalid_auth").is_transport());
    }

    #[test]
    fn test_api_code_absent_for_other_tiers() {
        let err = SlackError::Configuration(ConfigurationError::MissingToken);
        assert_eq!(err.api_code(), None);
    }
}
