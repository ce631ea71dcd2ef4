//! Error types and result aliases for Sprig operations.
//!
//! Provides a unified error type that covers all possible error conditions
//! across the Sprig ecosystem with actionable error messages.

use thiserror::Error;

/// Unified error type for all Sprig operations
#[derive(Error, Debug)]
pub enum SprigError {
    // Usage errors, raised at the CLI boundary before any network call
    #[error("Option '{field}' is invalid: {reason}")]
    InvalidOptions { field: String, reason: String },

    // Network-level failure in the transport itself
    #[error("Network error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Non-2xx status with a decodable error envelope; Display is the
    // server's own message
    #[error("{message}")]
    Server { status: u16, message: String },

    // Non-2xx status and the body was not a decodable error envelope
    #[error("There was an unknown error. The server returned a status of {status}")]
    Status { status: u16 },

    // 2xx status but decoding or normalizing the body failed
    #[error("Failed to deserialize the response, but the request itself succeeded: {message}")]
    Deserialize { message: String },
}

/// Result type alias for Sprig operations
pub type SprigResult<T> = Result<T, SprigError>;

impl SprigError {
    /// Create a transport error from any error type
    pub fn transport<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-options error for a named option field
    pub fn invalid_options(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable by retrying the call
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SprigError::Transport { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SprigError::InvalidOptions { .. } => {
                Some("Run 'sprig fetch --help' for the accepted type/option combinations")
            }
            SprigError::Transport { .. } => Some("Check your internet connection and try again"),
            SprigError::Server { status: 404, .. } => {
                Some("Check the record name or ID spelling, or try 'sprig search'")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_displays_envelope_message() {
        let err = SprigError::Server {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn test_status_error_embeds_raw_code() {
        let err = SprigError::Status { status: 502 };
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_deserialize_error_notes_request_succeeded() {
        let err = SprigError::Deserialize {
            message: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("request itself succeeded"));
    }

    #[test]
    fn test_recoverable() {
        let err = SprigError::transport(
            "connection refused".to_string(),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        );
        assert!(err.is_recoverable());
        assert!(!SprigError::Status { status: 500 }.is_recoverable());
    }
}
