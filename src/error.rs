//! Error types for the Pinata SDK.
//!
//! This module provides a unified error type for all SDK operations,
//! keeping transport failures, remote error documents, and local misuse
//! distinct from each other.

use thiserror::Error;

/// Result type for Pinata operations.
pub type Result<T> = std::result::Result<T, PinataError>;

/// Errors that can occur when using the Pinata SDK.
#[derive(Error, Debug)]
pub enum PinataError {
    /// Error response from the Pinata service (non-2xx status).
    ///
    /// The body is carried verbatim in `text`; the service does not
    /// guarantee structured error bodies.
    #[error("API error ({status} {reason}): {text}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
        /// Raw response body.
        text: String,
    },

    /// HTTP transport error (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body could not be parsed as the expected JSON.
    #[error("malformed success body: {0}")]
    MalformedBody(String),

    /// Invalid arguments, detected before any network call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Local file enumeration or read failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PinataError {
    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PinataError::Api { status, .. } => Some(*status),
            PinataError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the service rejected the supplied credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            PinataError::Api { status: 401, .. } | PinataError::Api { status: 403, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PinataError::Api {
            status: 404,
            reason: "Not Found".to_string(),
            text: "pin does not exist".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (404 Not Found): pin does not exist"
        );
    }

    #[test]
    fn test_is_auth_error() {
        let unauthorized = PinataError::Api {
            status: 401,
            reason: "Unauthorized".to_string(),
            text: String::new(),
        };
        assert!(unauthorized.is_auth_error());

        let forbidden = PinataError::Api {
            status: 403,
            reason: "Forbidden".to_string(),
            text: String::new(),
        };
        assert!(forbidden.is_auth_error());

        let not_found = PinataError::Api {
            status: 404,
            reason: "Not Found".to_string(),
            text: String::new(),
        };
        assert!(!not_found.is_auth_error());
    }

    #[test]
    fn test_status_code() {
        let err = PinataError::Api {
            status: 500,
            reason: "Internal Server Error".to_string(),
            text: String::new(),
        };
        assert_eq!(err.status_code(), Some(500));

        let invalid = PinataError::InvalidRequest("missing permissions".to_string());
        assert_eq!(invalid.status_code(), None);
    }
}
