use serde::Deserialize;
use thiserror::Error;

/// JSON error payload produced by the backend on failure.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend responded with status {status}")]
    Status { status: u16, body: Option<ErrorBody> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a status error from a raw response body, keeping the backend's
    /// JSON error message when the body carries one.
    pub fn from_response(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<ErrorBody>(raw_body).ok();
        ApiError::Status { status, body }
    }

    /// The message reported by the backend: `error`, then `details`.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body: Some(body), .. } => body
                .error
                .as_deref()
                .or(body.details.as_deref())
                .filter(|message| !message.trim().is_empty()),
            _ => None,
        }
    }

    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_over_details() {
        let err = ApiError::from_response(400, r#"{"error":"Email already exists","details":"UNIQUE"}"#);
        assert_eq!(err.user_message("fallback"), "Email already exists");
    }

    #[test]
    fn falls_back_to_details() {
        let err = ApiError::from_response(500, r#"{"details":"connection refused"}"#);
        assert_eq!(err.backend_message(), Some("connection refused"));
    }

    #[test]
    fn non_json_body_uses_fallback() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message("Failed to delete student"), "Failed to delete student");
    }

    #[test]
    fn network_errors_use_fallback() {
        let err = ApiError::Network("failed to fetch".into());
        assert_eq!(err.user_message("Failed"), "Failed");
        assert_eq!(err.to_string(), "network error: failed to fetch");
    }
}
