use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to the API
#[derive(Error, Debug)]
pub enum Error {
    /// Transport error from reqwest (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {error}")]
    Api { status: StatusCode, error: ApiError },

    /// The response body is not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request parameters could not be form-encoded
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Missing API key or malformed endpoint
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Structured error body returned by the API
///
/// see https://stripe.com/docs/api#errors
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// `invalid_request_error`, `api_error` or `card_error`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub message: String,

    /// For card errors, e.g. `card_declined` or `incorrect_number`
    #[serde(default)]
    pub code: Option<String>,

    /// Parameter the error relates to
    #[serde(default)]
    pub param: Option<String>,
}

impl ApiError {
    /// Wrap a body that is not a structured error
    pub(crate) fn from_body(body: String) -> Self {
        Self {
            kind: None,
            message: body,
            code: None,
            param: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{}: {}", kind, self.message)?,
            None => write!(f, "{}", self.message)?,
        }
        if let Some(param) = &self.param {
            write!(f, " (param: {})", param)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_envelope() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"error": {"type": "card_error", "message": "Your card was declined.", "code": "card_declined", "param": "card"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.error.kind.as_deref(), Some("card_error"));
        assert_eq!(envelope.error.code.as_deref(), Some("card_declined"));
        assert_eq!(
            envelope.error.to_string(),
            "card_error: Your card was declined. (param: card)"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: StatusCode::NOT_FOUND,
            error: ApiError {
                kind: Some("invalid_request_error".to_string()),
                message: "No such customer: cus_missing".to_string(),
                code: None,
                param: Some("id".to_string()),
            },
        };
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "API error (404 Not Found): invalid_request_error: No such customer: cus_missing (param: id)"
        );

        let raw = ApiError::from_body("Bad Gateway".to_string());
        assert_eq!(raw.to_string(), "Bad Gateway");
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = Error::Config("API key is empty".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
