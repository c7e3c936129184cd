//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for entry and exit times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an RFC 3339 string (as written by [`DateTime::to_rfc3339`]) into a
/// UTC [`Timestamp`], whatever offset it was written with.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when `value` is not valid RFC 3339.
pub fn parse_rfc3339(value: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|ts| ts.to_utc())
}
