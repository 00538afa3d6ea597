//! Date and time rendering helpers

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Default `strftime` pattern for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default `strftime` pattern for date-times, second precision, no offset
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Wall-clock time of an instant in the system time zone
pub fn local_datetime(instant: &DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&Local).naive_local()
}
