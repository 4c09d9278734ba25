//! Errors surfaced by API calls.
//!
//! Validation failures are not part of this enum; they never leave the form
//! (see [`crate::forms::FieldErrors`]).

use serde::Deserialize;
use thiserror::Error;

/// Failure of one REST call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status code.
        status: u16,
        /// `message` field of the error body, if the server sent one.
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An authorized call was attempted without a stored session token.
    #[error("No token found. Please login.")]
    MissingToken,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status and the raw response body,
    /// picking up the server's `message` when the body is JSON.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());
        ApiError::Http {
            status,
            message,
        }
    }

    /// Text for the transient notification: the server's own message when
    /// present, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Network(_) | ApiError::MissingToken => self.to_string(),
            ApiError::Http {
                message: None,
                ..
            }
            | ApiError::Parse(_) => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::from_response(409, r#"{"message":"Category already exists"}"#);
        assert_eq!(err.user_message("Failed to add category"), "Category already exists");
    }

    #[test]
    fn non_json_body_uses_fallback() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
    }

    #[test]
    fn blank_server_message_is_ignored() {
        let err = ApiError::from_response(400, r#"{"message":"   "}"#);
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn missing_token_has_fixed_text() {
        assert_eq!(ApiError::MissingToken.user_message("x"), "No token found. Please login.");
    }
}
