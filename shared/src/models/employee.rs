//! Employee Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::serde_helpers;

/// ABO blood group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    A,
    B,
    AB,
    O,
}

impl BloodGroup {
    /// All groups in form order
    pub const ALL: [BloodGroup; 4] = [BloodGroup::A, BloodGroup::B, BloodGroup::AB, BloodGroup::O];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::A => "A",
            BloodGroup::B => "B",
            BloodGroup::AB => "AB",
            BloodGroup::O => "O",
        }
    }

    /// Next group in form order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous group in form order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blood group '{0}', expected one of A, B, AB, O")]
pub struct UnknownBloodGroup(pub String);

impl FromStr for BloodGroup {
    type Err = UnknownBloodGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(BloodGroup::A),
            "B" => Ok(BloodGroup::B),
            "AB" => Ok(BloodGroup::AB),
            "O" => Ok(BloodGroup::O),
            _ => Err(UnknownBloodGroup(s.to_string())),
        }
    }
}

/// Employee as returned by the API
///
/// `employee_id` is the positional display identifier and is only present
/// in list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date_of_join: Option<String>,
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl EmployeeResponse {
    /// Every field that is a string on the wire, in column order
    pub fn string_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.id.as_str()),
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            Some(self.address.as_str()),
            self.date_of_join.as_deref(),
            self.blood_group.as_ref().map(BloodGroup::as_str),
            self.employee_id.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Create employee payload
///
/// Missing text fields are stored as empty strings. Any `_id` sent by the
/// client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub address: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::join_date"
    )]
    pub date_of_join: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::blood_group"
    )]
    pub blood_group: Option<BloodGroup>,
}

/// Update employee payload (merge patch)
///
/// Absent or `null` fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::join_date"
    )]
    pub date_of_join: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::blood_group"
    )]
    pub blood_group: Option<BloodGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_ignores_client_id_and_defaults_missing_text() {
        let body = json!({
            "_id": "should-not-survive",
            "email": "jay@example.com",
            "dateOfJoin": "2024-02-29T10:00:00.000Z",
            "bloodGroup": "AB"
        });
        let create: EmployeeCreate = serde_json::from_value(body).unwrap();
        assert_eq!(create.name, "");
        assert_eq!(create.address, "");
        assert_eq!(create.email, "jay@example.com");
        assert_eq!(create.blood_group, Some(BloodGroup::AB));
        assert_eq!(
            create.date_of_join.map(|d| crate::util::format_join_date(&d)),
            Some("2024-02-29".to_string())
        );

        let out = serde_json::to_value(&create).unwrap();
        assert!(out.get("_id").is_none());
    }

    #[test]
    fn empty_form_values_mean_not_set() {
        let body = json!({ "name": null, "dateOfJoin": "", "bloodGroup": "" });
        let create: EmployeeCreate = serde_json::from_value(body).unwrap();
        assert_eq!(create.name, "");
        assert_eq!(create.date_of_join, None);
        assert_eq!(create.blood_group, None);
    }

    #[test]
    fn unknown_blood_group_is_rejected() {
        let body = json!({ "bloodGroup": "C" });
        assert!(serde_json::from_value::<EmployeeCreate>(body).is_err());
    }

    #[test]
    fn update_patch_only_serializes_present_fields() {
        let patch: EmployeeUpdate = serde_json::from_value(json!({ "address": "X", "_id": "abc" })).unwrap();
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "address": "X" }));
    }

    #[test]
    fn response_uses_wire_names() {
        let resp = EmployeeResponse {
            id: "k1".into(),
            name: "Jaya".into(),
            email: "jaya@example.com".into(),
            address: "Chennai".into(),
            date_of_join: Some("2022-01-03".into()),
            blood_group: Some(BloodGroup::O),
            employee_id: Some("0001".into()),
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["_id"], "k1");
        assert_eq!(v["dateOfJoin"], "2022-01-03");
        assert_eq!(v["bloodGroup"], "O");
        assert_eq!(v["employeeId"], "0001");
        assert_eq!(resp.string_fields().count(), 7);
    }

    #[test]
    fn blood_group_cycles() {
        assert_eq!(BloodGroup::O.next(), BloodGroup::A);
        assert_eq!(BloodGroup::A.prev(), BloodGroup::O);
        assert_eq!("ab".parse::<BloodGroup>().unwrap(), BloodGroup::AB);
    }
}
