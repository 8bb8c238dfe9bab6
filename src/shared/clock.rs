//! Wall-clock helpers for the 12-hour sample times the backend returns.
//!
//! Samples carry only a clock time (`"hh:mm AM/PM"`); their civil date is
//! implied by the trailing window they were fetched for.

use crate::error::SdkError;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// Format of sample times, e.g. `"03:45 PM"`.
pub const SAMPLE_TIME_FORMAT: &str = "%I:%M %p";

/// Current naive wall-clock time in `timezone` (IANA name), or local time.
pub fn now_in(timezone: Option<&str>) -> Result<NaiveDateTime, SdkError> {
    match timezone {
        Some(name) => {
            let tz = parse_timezone(name)?;
            Ok(Utc::now().with_timezone(&tz).naive_local())
        }
        None => Ok(Local::now().naive_local()),
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, SdkError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| SdkError::Validation(format!("unknown timezone: {}", name)))
}

/// Parse a 12-hour sample time.
pub fn parse_clock_time(input: &str) -> Result<NaiveTime, SdkError> {
    NaiveTime::parse_from_str(input.trim(), SAMPLE_TIME_FORMAT).map_err(|source| {
        SdkError::TimeParse {
            input: input.to_string(),
            source,
        }
    })
}

/// Combine a clock time with `date`.
pub fn combine(time: NaiveTime, date: NaiveDate) -> NaiveDateTime {
    date.and_time(time)
}

/// Place a sample time on the calendar relative to `now`.
///
/// The window only looks backward, so a time that would land after `now`
/// belongs to the previous day.
pub fn anchor_before(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime, SdkError> {
    let at = combine(parse_clock_time(input)?, now.date());
    if at > now {
        Ok(at - Duration::days(1))
    } else {
        Ok(at)
    }
}
