//! Grid cells shared by the built-in resolutions.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::date::start_of_week;
use crate::error::{CalViewError, CalViewResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Day belongs to a neighbouring month and only pads the grid
    pub overflow: bool,
    /// Day is the resolution's current date
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Week {
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
    pub name: String,
    pub weeks: Vec<Week>,
}

impl Week {
    /// Seven consecutive days from `first`, flagging days outside `month` as overflow.
    /// Overflow days are never marked current.
    pub(crate) fn starting_at(first: NaiveDate, month: u32, current: NaiveDate) -> Self {
        let days = first
            .iter_days()
            .take(7)
            .map(|date| Day {
                date,
                weekday: date.weekday(),
                overflow: date.month() != month,
                is_current: date == current && date.month() == month,
            })
            .collect();

        Week { days }
    }

    pub fn first_day(&self) -> Option<&Day> {
        self.days.first()
    }
}

impl Month {
    /// Lay out the month that starts on `first` as whole weeks beginning on `start_day`.
    pub(crate) fn build(
        first: NaiveDate,
        start_day: Weekday,
        current: NaiveDate,
    ) -> CalViewResult<Self> {
        let last = first
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| CalViewError::InvalidDate(format!("month of {} out of range", first)))?;

        let mut weeks = Vec::new();
        let mut cursor = start_of_week(first, start_day)?;

        while cursor <= last {
            weeks.push(Week::starting_at(cursor, first.month(), current));
            cursor = cursor
                .checked_add_days(Days::new(7))
                .ok_or_else(|| {
                    CalViewError::InvalidDate(format!("week after {} out of range", cursor))
                })?;
        }

        Ok(Month {
            year: first.year(),
            month: first.month(),
            name: first.format("%B").to_string(),
            weeks,
        })
    }

    /// Days that actually belong to this month, in order.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter())
            .filter(|day| !day.overflow)
    }
}
