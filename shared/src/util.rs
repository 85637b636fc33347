use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Wire format of `dateOfJoin` in list responses
pub const JOIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Width of the zero-padded display identifier
pub const DISPLAY_ID_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct DateParseError(pub String);

/// Parse a join date as sent by a client.
///
/// Accepts a bare calendar date (`2024-03-01`, taken as midnight UTC) or a
/// full RFC 3339 timestamp (`2024-03-01T08:30:00.000Z`), which is what a
/// date picker usually produces.
pub fn parse_join_date(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, JOIN_DATE_FORMAT)
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DateParseError(input.to_string()))
}

/// Render a stored join timestamp as `YYYY-MM-DD` (UTC date part)
pub fn format_join_date(dt: &DateTime<Utc>) -> String {
    dt.format(JOIN_DATE_FORMAT).to_string()
}

/// Display identifier for the record at `index` (0-based) of a full scan.
///
/// `0 -> "0001"`. The value is positional, so it changes whenever records
/// before it are inserted or removed.
pub fn display_id(index: usize) -> String {
    format!("{:0width$}", index + 1, width = DISPLAY_ID_WIDTH)
}
