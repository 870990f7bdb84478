//! Week resolution: the seven days around the current date, optionally
//! without the weekend.

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::date::{is_weekend, start_of_week};
use crate::error::{CalViewError, CalViewResult};
use crate::resolution::Resolution;
use crate::resolution::grid::Week;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekResolution {
    date: Option<NaiveDateTime>,
    start_day: Weekday,
    hide_weekends: bool,
}

impl Default for WeekResolution {
    fn default() -> Self {
        WeekResolution::new(Weekday::Mon)
    }
}

impl WeekResolution {
    pub fn new(start_day: Weekday) -> Self {
        WeekResolution {
            date: None,
            start_day,
            hide_weekends: false,
        }
    }

    pub fn hide_weekends(mut self, hide: bool) -> Self {
        self.hide_weekends = hide;
        self
    }

    pub fn start_day(&self) -> Weekday {
        self.start_day
    }

    pub fn hides_weekends(&self) -> bool {
        self.hide_weekends
    }

    /// The current week; overflow marks days outside the current date's month.
    pub fn week(&self) -> CalViewResult<Week> {
        let current = self.date.ok_or(CalViewError::MissingDate)?.date();
        let first = start_of_week(current, self.start_day)?;

        let mut week = Week::starting_at(first, current.month(), current);
        if self.hide_weekends {
            week.days.retain(|day| !is_weekend(day.weekday));
        }

        Ok(week)
    }
}

impl Resolution for WeekResolution {
    fn set_date_time(&mut self, date: NaiveDateTime) {
        self.date = Some(date);
    }

    fn date_time(&self) -> Option<NaiveDateTime> {
        self.date
    }

    fn build(&self) -> CalViewResult<serde_json::Value> {
        Ok(serde_json::to_value(self.week()?)?)
    }
}
