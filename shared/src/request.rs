//! Request types and API paths

use serde::{Deserialize, Serialize};

use crate::models::serde_helpers;

/// Collection path of the employee API
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// Advisory duplicate-email probe
pub const CHECK_EMAIL_PATH: &str = "/api/employees/check-email";

/// Path of a single employee
pub fn employee_path(id: &str) -> String {
    format!("{}/{}", EMPLOYEES_PATH, id)
}

/// Body of the duplicate-email probe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEmailRequest {
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub email: String,
}

impl CheckEmailRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
