//! Error handling module for the Repair Hub client.
//!
//! Provides a centralized error type mapping backend failures to a small
//! taxonomy. Nothing here is fatal: every failure is per-operation and
//! recoverable by retrying the user action. No automatic retry exists.

use reqwest::StatusCode;
use serde::Deserialize;

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
}

/// Client-side error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing, invalid, or expired credential
    Unauthorized(String),
    /// Resource not found
    NotFound(String),
    /// Rejected payload (client-side or server-side validation)
    Validation(String),
    /// Transport-level failure (connection refused, timeout, DNS)
    Network(String),
    /// Response body did not match the expected shape
    Decode(String),
    /// Backend reported an internal failure
    Server(String),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => codes::UNAUTHORIZED,
            ApiError::NotFound(_) => codes::NOT_FOUND,
            ApiError::Validation(_) => codes::VALIDATION_ERROR,
            ApiError::Network(_) => codes::NETWORK_ERROR,
            ApiError::Decode(_) => codes::DECODE_ERROR,
            ApiError::Server(_) => codes::SERVER_ERROR,
        }
    }

    /// Get the human-readable error message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Validation(msg)
            | ApiError::Network(msg)
            | ApiError::Decode(msg)
            | ApiError::Server(msg) => msg.clone(),
        }
    }

    /// Whether this error is a not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// Map an HTTP status and server-supplied message to the taxonomy.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(message)
            }
            _ => ApiError::Server(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(format!("Response decode error: {}", err))
        } else {
            ApiError::Network(format!("Network error: {}", err))
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(format!("JSON error: {}", err))
    }
}

/// Error payload shape returned by the backend on failure.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "no token".to_string());
        assert_eq!(err.error_code(), codes::UNAUTHORIZED);

        let err = ApiError::from_status(StatusCode::NOT_FOUND, "gone".to_string());
        assert!(err.is_not_found());

        let err = ApiError::from_status(StatusCode::BAD_REQUEST, "bad".to_string());
        assert_eq!(err.error_code(), codes::VALIDATION_ERROR);

        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        assert_eq!(err.error_code(), codes::SERVER_ERROR);
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = ApiError::Validation("Title is required".to_string());
        assert_eq!(err.to_string(), "VALIDATION_ERROR: Title is required");
    }
}
