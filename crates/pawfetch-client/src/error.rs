//! Typed errors for adoption service calls.

use std::fmt;

use serde_json::Value;

/// Categories of API errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Transport failure: unreachable host, connection reset, timeout.
    Network,
    /// Non-2xx response from the service.
    HttpStatus,
    /// Response body did not decode as the expected shape.
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Structured error from the API facade with kind and details.
///
/// The facade performs no recovery: every failure surfaces here unchanged,
/// and the caller decides how to render it.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// HTTP status code, for `HttpStatus` errors
    pub status: Option<u16>,
    /// Raw response body, for `HttpStatus` errors
    pub body: Option<String>,
}

impl ApiError {
    /// Creates a transport-level error from a failed request.
    pub fn network(err: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: format!("request failed: {err}"),
            status: None,
            body: None,
        }
    }

    /// Creates an HTTP status error, preserving the status and raw body.
    pub fn http_status(status: u16, body: &str) -> Self {
        // Try to extract a cleaner error message from a JSON body
        let message = if let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(msg) = json
                .get("error")
                .and_then(|e| e.get("message"))
                .or_else(|| json.get("message"))
                .and_then(Value::as_str)
        {
            format!("HTTP {status}: {msg}")
        } else {
            format!("HTTP {status}")
        };
        Self {
            kind: ApiErrorKind::HttpStatus,
            message,
            status: Some(status),
            body: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Creates a decode error for a response body that did not parse.
    pub fn decode(path: &str, err: &serde_json::Error) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: format!("failed to decode response from {path}: {err}"),
            status: None,
            body: None,
        }
    }

    /// Whether the service rejected the session (HTTP 401/403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status, Some(401 | 403))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API facade operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: HTTP errors keep the status and raw body for the caller.
    #[test]
    fn test_http_status_preserves_status_and_body() {
        let err = ApiError::http_status(401, "Unauthorized");
        assert_eq!(err.kind, ApiErrorKind::HttpStatus);
        assert_eq!(err.status, Some(401));
        assert_eq!(err.body.as_deref(), Some("Unauthorized"));
        assert!(err.is_auth_error());
    }

    /// Test: a JSON error body contributes its message to the summary.
    #[test]
    fn test_http_status_extracts_json_message() {
        let err = ApiError::http_status(400, r#"{"error":{"message":"bad request"}}"#);
        assert_eq!(err.message, "HTTP 400: bad request");

        let err = ApiError::http_status(400, r#"{"message":"missing email"}"#);
        assert_eq!(err.message, "HTTP 400: missing email");
    }

    /// Test: an empty body yields a bare status message and no body field.
    #[test]
    fn test_http_status_empty_body() {
        let err = ApiError::http_status(500, "");
        assert_eq!(err.message, "HTTP 500");
        assert_eq!(err.body, None);
        assert!(!err.is_auth_error());
    }
}
