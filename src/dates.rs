//! Date helpers for the expenses page heading.

use time::{Date, OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description};
use time_tz::{Offset, TimeZone};

use crate::Error;

const LONG_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday], [day padding:none] [month repr:long] [year]");

/// Resolve a canonical timezone name, e.g. "Pacific/Auckland", to its
/// current UTC offset.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Get today's date in the given timezone.
///
/// # Errors
/// Returns an [Error::InvalidTimezoneError] if `local_timezone` is not a
/// canonical timezone name.
pub fn current_local_date(local_timezone: &str) -> Result<Date, Error> {
    let Some(local_offset) = get_local_offset(local_timezone) else {
        tracing::error!("Invalid timezone {}", local_timezone);
        return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
    };

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}

/// Format a date the way the page heading displays it, e.g.
/// "Monday, 1 January 2024".
pub fn format_long_date(date: Date) -> String {
    match date.format(LONG_DATE_FORMAT) {
        Ok(formatted_date) => formatted_date,
        Err(error) => {
            tracing::error!("Could not format date {date}: {error}");
            date.to_string()
        }
    }
}
