//! Time related utils.

use chrono::{SecondsFormat, Utc};

use crate::{Error, Result};

/// DateTime in UTC, the only timezone used for signing.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 with separators and second precision.
///
/// This is the format of the `x-bce-date` header and the auth string timestamp.
///
/// - `2015-04-27T08:23:49Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse time from RFC 3339, for example `2015-04-27T08:23:49Z`.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::unexpected(format!("parse '{s}' into rfc3339 failed")).with_source(e))
}
