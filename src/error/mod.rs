//! Person API Error Types
//!
//! Error hierarchy for the client: a root error with one variant per failure
//! area, each area carrying its own detail enum.

use std::time::Duration;
use thiserror::Error;

/// Root error type for the Person API integration.
#[derive(Error, Debug)]
pub enum PersonApiError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Person API responded with status code {status}")]
    Api { status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl PersonApiError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "PERSON_API_CONFIG",
            Self::Auth(_) => "PERSON_API_AUTH",
            Self::Network(_) => "PERSON_API_NETWORK",
            Self::Api { .. } => "PERSON_API_STATUS",
            Self::Serialization(_) => "PERSON_API_SERIALIZATION",
            Self::InvalidArgument { .. } => "PERSON_API_INVALID_ARGUMENT",
        }
    }

    /// HTTP status carried by the error, from either endpoint.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status } => Some(*status),
            Self::Auth(AuthError::Rejected { status }) => Some(*status),
            _ => None,
        }
    }

    /// Check if the failure happened while obtaining an access token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Fold a token fetch failure into the authentication error area.
    ///
    /// Status rejections pass through; transport and decoding failures are
    /// wrapped so callers of `initialize`/`refresh` see a single error kind.
    pub(crate) fn into_auth_error(self) -> Self {
        match self {
            Self::Auth(e) => Self::Auth(e),
            Self::Network(e) => Self::Auth(AuthError::Unreachable(e)),
            Self::Serialization(e) => Self::Auth(AuthError::InvalidTokenResponse {
                message: e.to_string(),
            }),
            Self::Api { status } => Self::Auth(AuthError::Rejected { status }),
            other => other,
        }
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint { url: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Failed to create HTTP client: {message}")]
    HttpClient { message: String },
}

/// Failure obtaining an access token from the authorization endpoint.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization endpoint responded with status code {status}")]
    Rejected { status: u16 },

    #[error("Authorization endpoint unreachable: {0}")]
    Unreachable(NetworkError),

    #[error("Invalid token response: {message}")]
    InvalidTokenResponse { message: String },
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("Failed to read response body: {message}")]
    ResponseUnreadable { message: String },

    #[error("Response too large: {size} bytes")]
    ResponseTooLarge { size: usize },
}

/// Request or response body could not be (de)serialized.
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("Failed to decode {target}: {message}")]
    Decode {
        target: &'static str,
        message: String,
    },

    #[error("Failed to encode request body: {message}")]
    Encode { message: String },
}

impl SerializationError {
    pub(crate) fn decode(target: &'static str, error: serde_json::Error) -> Self {
        Self::Decode {
            target,
            message: error.to_string(),
        }
    }
}

/// Result type for Person API operations.
pub type PersonApiResult<T> = Result<T, PersonApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        assert_eq!(PersonApiError::Api { status: 404 }.status_code(), Some(404));
        assert_eq!(
            PersonApiError::Auth(AuthError::Rejected { status: 401 }).status_code(),
            Some(401)
        );
        assert_eq!(
            PersonApiError::invalid_argument("bad").status_code(),
            None
        );
    }

    #[test]
    fn test_into_auth_error() {
        let network = PersonApiError::Network(NetworkError::ConnectionFailed {
            message: "refused".to_string(),
        });
        assert!(matches!(
            network.into_auth_error(),
            PersonApiError::Auth(AuthError::Unreachable(NetworkError::ConnectionFailed { .. }))
        ));

        let decode = PersonApiError::Serialization(SerializationError::Decode {
            target: "token response",
            message: "expected value".to_string(),
        });
        let folded = decode.into_auth_error();
        assert!(folded.is_auth_error());
        assert_eq!(folded.error_code(), "PERSON_API_AUTH");

        let invalid = PersonApiError::invalid_argument("empty").into_auth_error();
        assert!(!invalid.is_auth_error());
    }

    #[test]
    fn test_api_error_message() {
        let error = PersonApiError::Api { status: 500 };
        assert_eq!(
            error.to_string(),
            "Person API responded with status code 500"
        );
    }
}
