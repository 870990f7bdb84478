//! Date parsing and week arithmetic shared by the calendar and its resolutions.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::{CalViewError, CalViewResult};

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Build a midnight timestamp from year/month/day, rejecting impossible dates.
pub fn from_ymd(year: i32, month: u32, day: u32) -> CalViewResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(start_of_day)
        .ok_or_else(|| CalViewError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
}

/// Parse YYYY-MM-DD (as midnight) or YYYY-MM-DDTHH:MM[:SS].
pub fn parse_date_time(s: &str) -> CalViewResult<NaiveDateTime> {
    let s = s.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(start_of_day)
        .map_err(|_| {
            CalViewError::InvalidDate(format!(
                "'{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                s
            ))
        })
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The last date on or before `date` that falls on `start_day`.
pub fn start_of_week(date: NaiveDate, start_day: Weekday) -> CalViewResult<NaiveDate> {
    let offset = (7 + date.weekday().num_days_from_monday() - start_day.num_days_from_monday()) % 7;

    date.checked_sub_days(Days::new(offset as u64))
        .ok_or_else(|| CalViewError::InvalidDate(format!("no week start before {}", date)))
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
