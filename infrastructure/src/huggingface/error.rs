//! Error types for the Hugging Face adapter

use blogsmith_application::GatewayError;
use thiserror::Error;

/// Result type alias for Hugging Face operations
pub type Result<T> = std::result::Result<T, HuggingFaceError>;

/// Errors that can occur when calling the hosted inference API
#[derive(Error, Debug)]
pub enum HuggingFaceError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Endpoint returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Model returned no text")]
    EmptyCompletion,
}

impl HuggingFaceError {
    /// Classify a transport-level reqwest error.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            HuggingFaceError::Timeout
        } else {
            HuggingFaceError::Connection(error.to_string())
        }
    }
}

impl From<HuggingFaceError> for GatewayError {
    fn from(error: HuggingFaceError) -> Self {
        match error {
            HuggingFaceError::Timeout => GatewayError::Timeout,
            HuggingFaceError::Connection(msg) => GatewayError::ConnectionError(msg),
            HuggingFaceError::ClientBuild(e) => GatewayError::ConnectionError(e.to_string()),
            HuggingFaceError::Status { status, message } => match status {
                401 | 403 => GatewayError::Unauthorized(message),
                429 | 500..=599 => {
                    GatewayError::ServiceUnavailable(format!("HTTP {}: {}", status, message))
                }
                _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, message)),
            },
            e @ HuggingFaceError::ParseError { .. } => GatewayError::RequestFailed(e.to_string()),
            HuggingFaceError::EmptyCompletion => GatewayError::EmptyResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> GatewayError {
        HuggingFaceError::Status {
            status: code,
            message: "msg".to_string(),
        }
        .into()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status(401), GatewayError::Unauthorized("msg".to_string()));
        assert_eq!(status(403), GatewayError::Unauthorized("msg".to_string()));
        assert!(matches!(status(429), GatewayError::ServiceUnavailable(_)));
        assert!(matches!(status(503), GatewayError::ServiceUnavailable(_)));
        assert!(matches!(status(400), GatewayError::RequestFailed(_)));
        assert!(matches!(status(404), GatewayError::RequestFailed(_)));
    }

    #[test]
    fn test_empty_and_timeout_mapping() {
        assert_eq!(
            GatewayError::from(HuggingFaceError::EmptyCompletion),
            GatewayError::EmptyResponse
        );
        assert_eq!(
            GatewayError::from(HuggingFaceError::Timeout),
            GatewayError::Timeout
        );
    }
}
