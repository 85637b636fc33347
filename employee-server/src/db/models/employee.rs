//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{BloodGroup, EmployeeCreate};
use surrealdb::RecordId;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee record as stored in the `employee` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub date_of_join: Option<DateTime<Utc>>,
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
}

impl Employee {
    /// Bare record key, i.e. `abc123` for `employee:abc123`
    pub fn key(&self) -> String {
        record_key(&self.id)
    }
}

/// Bare string key of a record id, i.e. `abc123` for `employee:abc123`
///
/// Generated and path-supplied keys are strings; other key kinds fall back
/// to their SurrealQL rendering.
pub fn record_key(id: &RecordId) -> String {
    let key = id.key().clone();
    String::try_from(key).unwrap_or_else(|_| id.key().to_string())
}

/// Write-side view of a new record
///
/// A blank email is left out of the document, so the UNIQUE index on
/// `email` (which skips NONE) does not count it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeContent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_join: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
}

impl From<EmployeeCreate> for EmployeeContent {
    fn from(data: EmployeeCreate) -> Self {
        Self {
            name: data.name,
            email: Some(data.email).filter(|e| !e.is_empty()),
            address: data.address,
            date_of_join: data.date_of_join,
            blood_group: data.blood_group,
        }
    }
}
