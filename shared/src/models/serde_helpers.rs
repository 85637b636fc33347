//! Lenient deserializers for client-supplied employee fields
//!
//! Form clients send empty strings for untouched inputs and full timestamps
//! from date pickers; both are normalized here instead of being rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, de};

use super::BloodGroup;
use crate::util::parse_join_date;

/// Deserialize an optional join date.
///
/// `null`, missing and `""` map to `None`; `YYYY-MM-DD` and RFC 3339 strings
/// are parsed.
pub fn join_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_join_date(&s).map(Some).map_err(de::Error::custom),
    }
}

/// Deserialize an optional blood group where `""` means "not set"
pub fn blood_group<'de, D>(deserializer: D) -> Result<Option<BloodGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Deserialize a string that may be `null`, treating `null` as `""`
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
