/*
[INPUT]:  Error sources (transport, JSON decoding, ret_msg envelopes, session store)
[OUTPUT]: Structured error types for every Paladins API call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or new ret_msg classifications
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Paladins API client
#[derive(Error, Debug)]
pub enum PaladinsError {
    /// Transport failure (DNS, connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response that did not carry a JSON body
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Body was not valid JSON, or did not match the requested shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Developer id / auth key rejected by the remote service
    #[error("Unauthorized developer: {message}")]
    UnauthorizedDeveloper { message: String },

    /// Requested entity is not present in the response set
    #[error("Not found: {method} returned no results")]
    NotFound { method: String },

    /// Entity exists but its profile is private
    #[error("Private profile: {message}")]
    PrivateProfile { message: String },

    /// Session was reported invalid again after a fresh renewal
    #[error("Session rejected after {attempts} attempts")]
    SessionRejected { attempts: u32 },

    /// Any other non-null ret_msg
    #[error("API error: {message}")]
    Api { message: String },

    /// Response had an unexpected structure
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error (missing credentials, corrupt session file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl PaladinsError {
    /// Errors that must abort the whole call chain
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PaladinsError::UnauthorizedDeveloper { .. }
                | PaladinsError::SessionRejected { .. }
                | PaladinsError::Config(_)
        )
    }

    /// Check if error indicates an authentication or session failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            PaladinsError::UnauthorizedDeveloper { .. } | PaladinsError::SessionRejected { .. }
        )
    }

    /// Create a status error from a non-2xx response
    pub fn http_status(status: StatusCode, body: impl Into<String>) -> Self {
        PaladinsError::HttpStatus {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for Paladins API operations
pub type Result<T> = std::result::Result<T, PaladinsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_fatal() {
        let unauthorized = PaladinsError::UnauthorizedDeveloper {
            message: "Exception while validating developer access.".to_string(),
        };
        assert!(unauthorized.is_fatal());
        assert!(PaladinsError::SessionRejected { attempts: 2 }.is_fatal());

        let not_found = PaladinsError::NotFound {
            method: "getplayer".to_string(),
        };
        assert!(!not_found.is_fatal());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(PaladinsError::SessionRejected { attempts: 2 }.is_auth_error());
        assert!(
            !PaladinsError::PrivateProfile {
                message: "Player Privacy Flag set".to_string()
            }
            .is_auth_error()
        );
    }

    #[test]
    fn test_http_status_creation() {
        let err = PaladinsError::http_status(StatusCode::BAD_GATEWAY, "upstream down");
        match err {
            PaladinsError::HttpStatus { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "upstream down");
            }
            _ => panic!("Expected HttpStatus error variant"),
        }
    }
}
