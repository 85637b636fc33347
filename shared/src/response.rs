//! API Response types
//!
//! Response bodies that are not employee records.

use serde::{Deserialize, Serialize};

/// Message returned when an email is free to use
pub const EMAIL_AVAILABLE: &str = "Email is available";

/// Message returned when an email is already taken
pub const EMAIL_TAKEN: &str = "Email already exists";

/// Generic error message for infrastructure failures
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Human-readable outcome, `{ "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Delete acknowledgment, `{ "success": true }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Error body
///
/// Conflicts carry `message`; every other failure carries `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: None,
            message: Some(message.into()),
        }
    }

    /// Whichever text the server sent
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}
