//! Client error types

use http::StatusCode;
use shared::response::ErrorBody;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource already exists (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-success response to an error, preferring the server's message
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let text = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.text().map(str::to_string))
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

        match status {
            StatusCode::CONFLICT => ClientError::Conflict(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(format!("{}: {}", status.as_u16(), text)),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ClientError::Conflict(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_keeps_server_message() {
        let err = ClientError::from_status(StatusCode::CONFLICT, br#"{"message":"Email already exists"}"#);
        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "Conflict: Email already exists");
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, b"upstream down");
        assert!(matches!(err, ClientError::Internal(ref m) if m == "502: upstream down"));
    }

    #[test]
    fn not_found_reads_error_key() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, br#"{"error":"Employee not found"}"#);
        assert!(matches!(err, ClientError::NotFound(ref m) if m == "Employee not found"));
    }
}
