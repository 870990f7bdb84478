//! Calendar events.
//!
//! The calendar stores events as trait objects and only looks at their time
//! span when asked for the events of a timeframe.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::date::start_of_day;
use crate::error::{CalViewError, CalViewResult};

/// Something that can be placed on a calendar.
pub trait Event: fmt::Debug {
    fn title(&self) -> &str;

    fn start(&self) -> NaiveDateTime;

    fn end(&self) -> NaiveDateTime;

    fn is_all_day(&self) -> bool {
        false
    }

    /// Whether the event overlaps the half-open window [from, to).
    /// Zero-length events count when their instant falls inside the window.
    fn occurs_within(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        let (start, end) = (self.start(), self.end());
        if start == end {
            return start >= from && start < to;
        }
        start < to && end > from
    }
}

/// A plain event with a title and a time span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
}

impl BasicEvent {
    pub fn new(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalViewResult<Self> {
        if end < start {
            return Err(CalViewError::InvalidEventRange(format!(
                "'{}' ends at {} before it starts at {}",
                title, end, start
            )));
        }

        Ok(BasicEvent {
            title: title.to_string(),
            start,
            end,
            all_day: false,
        })
    }

    /// An all-day event covering `first` through `last` inclusive.
    pub fn all_day(title: &str, first: NaiveDate, last: NaiveDate) -> CalViewResult<Self> {
        let end = last
            .succ_opt()
            .map(start_of_day)
            .ok_or_else(|| CalViewError::InvalidDate(format!("no day after {}", last)))?;

        let mut event = Self::new(title, start_of_day(first), end)?;
        event.all_day = true;
        Ok(event)
    }
}

impl Event for BasicEvent {
    fn title(&self) -> &str {
        &self.title
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }

    fn is_all_day(&self) -> bool {
        self.all_day
    }
}

impl fmt::Display for BasicEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_day {
            write!(f, "{} ({}, all day)", self.title, self.start.date())
        } else {
            write!(f, "{} ({} - {})", self.title, self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::from_ymd;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        from_ymd(2024, 6, day).unwrap() + chrono::Duration::hours(hour as i64)
    }

    #[test]
    fn rejects_events_ending_before_they_start() {
        let err = BasicEvent::new("Backwards", at(10, 12), at(10, 9)).unwrap_err();
        assert!(matches!(err, CalViewError::InvalidEventRange(_)));
    }

    #[test]
    fn all_day_event_spans_whole_days() {
        let first = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        let event = BasicEvent::all_day("Offsite", first, last).unwrap();

        assert!(event.is_all_day());
        assert_eq!(event.start(), at(10, 0));
        assert_eq!(event.end(), at(12, 0));
        assert_eq!(event.to_string(), "Offsite (2024-06-10, all day)");
    }

    #[test]
    fn overlap_is_half_open() {
        let event = BasicEvent::new("Standup", at(10, 9), at(10, 10)).unwrap();

        assert!(event.occurs_within(at(10, 0), at(11, 0)));
        assert!(event.occurs_within(at(10, 9), at(10, 10)));
        assert!(!event.occurs_within(at(10, 10), at(10, 12)));
        assert!(!event.occurs_within(at(10, 0), at(10, 9)));
    }

    #[test]
    fn instant_events_match_their_window() {
        let event = BasicEvent::new("Deadline", at(10, 17), at(10, 17)).unwrap();

        assert!(event.occurs_within(at(10, 17), at(10, 18)));
        assert!(!event.occurs_within(at(10, 12), at(10, 17)));
    }
}
