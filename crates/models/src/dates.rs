//! Wire timestamp parsing.

use chrono::{DateTime, FixedOffset};

/// Parses an RFC 3339 timestamp as transmitted by the API.
///
/// Returns `None` for an empty or unparsable field; callers treat that as
/// "no date" rather than an error.
pub fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}
