//! Month resolution: the current month plus a configurable number of
//! months either side.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};

use crate::error::{CalViewError, CalViewResult};
use crate::resolution::Resolution;
use crate::resolution::grid::Month;

/// Upper bound on the months shown before or after the current one.
pub const MAX_SURROUNDING_MONTHS: u32 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthResolution {
    date: Option<NaiveDateTime>,
    show_prev_months: u32,
    show_next_months: u32,
    start_day: Weekday,
}

impl Default for MonthResolution {
    /// Just the current month, weeks starting on Monday
    fn default() -> Self {
        MonthResolution::new(0, 0)
    }
}

impl MonthResolution {
    pub fn new(show_prev_months: u32, show_next_months: u32) -> Self {
        MonthResolution {
            date: None,
            show_prev_months,
            show_next_months,
            start_day: Weekday::Mon,
        }
    }

    pub fn with_start_day(mut self, start_day: Weekday) -> Self {
        self.start_day = start_day;
        self
    }

    pub fn show_prev_months(&self) -> u32 {
        self.show_prev_months
    }

    pub fn show_next_months(&self) -> u32 {
        self.show_next_months
    }

    pub fn start_day(&self) -> Weekday {
        self.start_day
    }

    /// Build the typed month grids, oldest first.
    pub fn months(&self) -> CalViewResult<Vec<Month>> {
        let total = month_count(self.show_prev_months, self.show_next_months)?;
        let current = self.date.ok_or(CalViewError::MissingDate)?.date();
        let first_of_current = first_of_month(current)?;

        let from = first_of_current
            .checked_sub_months(Months::new(self.show_prev_months))
            .ok_or_else(|| out_of_range(first_of_current))?;

        (0..total)
            .map(|offset| {
                let first = from
                    .checked_add_months(Months::new(offset))
                    .ok_or_else(|| out_of_range(from))?;
                Month::build(first, self.start_day, current)
            })
            .collect()
    }
}

impl Resolution for MonthResolution {
    fn set_date_time(&mut self, date: NaiveDateTime) {
        self.date = Some(date);
    }

    fn date_time(&self) -> Option<NaiveDateTime> {
        self.date
    }

    fn build(&self) -> CalViewResult<serde_json::Value> {
        let months = self.months()?;
        Ok(serde_json::to_value(months)?)
    }
}

/// Number of month grids to build, rejecting counts above [`MAX_SURROUNDING_MONTHS`].
pub(crate) fn month_count(show_prev_months: u32, show_next_months: u32) -> CalViewResult<u32> {
    if show_prev_months > MAX_SURROUNDING_MONTHS || show_next_months > MAX_SURROUNDING_MONTHS {
        return Err(CalViewError::Config(format!(
            "cannot show {} previous and {} next months (at most {} either side)",
            show_prev_months, show_next_months, MAX_SURROUNDING_MONTHS
        )));
    }

    show_prev_months
        .checked_add(1)
        .and_then(|n| n.checked_add(show_next_months))
        .ok_or_else(|| CalViewError::Config("month count overflows".into()))
}

fn first_of_month(date: NaiveDate) -> CalViewResult<NaiveDate> {
    date.with_day(1)
        .ok_or_else(|| CalViewError::InvalidDate(format!("no first day for month of {}", date)))
}

fn out_of_range(date: NaiveDate) -> CalViewError {
    CalViewError::InvalidDate(format!("months around {} out of range", date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::from_ymd;

    #[test]
    fn build_without_date_fails() {
        let resolution = MonthResolution::default();
        assert!(matches!(resolution.build(), Err(CalViewError::MissingDate)));
    }

    #[test]
    fn huge_month_counts_are_rejected() {
        let mut resolution = MonthResolution::new(0, u32::MAX);
        resolution.set_date_time(from_ymd(2024, 1, 1).unwrap());
        assert!(matches!(resolution.build(), Err(CalViewError::Config(_))));

        let mut resolution = MonthResolution::new(MAX_SURROUNDING_MONTHS + 1, 0);
        resolution.set_date_time(from_ymd(2024, 1, 1).unwrap());
        assert!(matches!(resolution.months(), Err(CalViewError::Config(_))));
    }

    #[test]
    fn overflowing_config_fails_view_data() {
        use crate::calendar::Calendar;
        use crate::config::ResolutionConfig;

        let config = ResolutionConfig {
            show_next_months: u32::MAX,
            ..Default::default()
        };

        let mut calendar = Calendar::from_ymd(2024, 1, 1).unwrap();
        calendar.set_boxed_resolution(config.into_resolution());

        assert!(matches!(calendar.view_data(), Err(CalViewError::Config(_))));
    }

    #[test]
    fn largest_allowed_range_builds() {
        let mut resolution = MonthResolution::new(MAX_SURROUNDING_MONTHS, MAX_SURROUNDING_MONTHS);
        resolution.set_date_time(from_ymd(2024, 1, 1).unwrap());
        assert_eq!(resolution.months().unwrap().len(), 241);
    }

    #[test]
    fn current_day_is_not_marked_in_neighbouring_padding() {
        let mut resolution = MonthResolution::new(0, 1);
        // May 2024 starts on a Wednesday, so its first row repeats 2024-04-29 and 2024-04-30
        resolution.set_date_time(from_ymd(2024, 4, 30).unwrap());

        let months = resolution.months().unwrap();
        let may = &months[1];
        let padding_copy = may.weeks[0]
            .days
            .iter()
            .find(|d| d.date == NaiveDate::from_ymd_opt(2024, 4, 30).unwrap())
            .unwrap();

        assert!(padding_copy.overflow);
        assert!(!padding_copy.is_current);

        let marked: usize = months
            .iter()
            .flat_map(|m| m.weeks.iter().flat_map(|w| w.days.iter()))
            .filter(|d| d.is_current)
            .count();
        assert_eq!(marked, 1);
    }

    #[test]
    fn shows_months_either_side() {
        let mut resolution = MonthResolution::new(1, 2);
        resolution.set_date_time(from_ymd(2024, 12, 25).unwrap());

        let months = resolution.months().unwrap();
        let labels: Vec<(i32, u32)> = months.iter().map(|m| (m.year, m.month)).collect();

        assert_eq!(labels, vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
    }

    #[test]
    fn current_day_is_only_marked_in_its_own_month() {
        let mut resolution = MonthResolution::new(1, 1);
        resolution.set_date_time(from_ymd(2024, 3, 31).unwrap());

        let months = resolution.months().unwrap();
        let marked: Vec<u32> = months
            .iter()
            .filter(|m| m.days().any(|d| d.is_current))
            .map(|m| m.month)
            .collect();

        assert_eq!(marked, vec![3]);
    }

    #[test]
    fn start_day_shapes_every_week() {
        let mut resolution = MonthResolution::default().with_start_day(Weekday::Sun);
        resolution.set_date_time(from_ymd(2024, 9, 10).unwrap());

        let months = resolution.months().unwrap();
        assert!(
            months[0]
                .weeks
                .iter()
                .all(|w| w.days.len() == 7 && w.days[0].weekday == Weekday::Sun)
        );
    }

    #[test]
    fn build_serialises_month_grids() {
        let mut resolution = MonthResolution::default();
        resolution.set_date_time(from_ymd(2024, 2, 14).unwrap());

        let value = resolution.build().unwrap();
        let months = value.as_array().unwrap();

        assert_eq!(months.len(), 1);
        assert_eq!(months[0]["name"], "February");
        assert_eq!(months[0]["weeks"][0]["days"][0]["date"], "2024-01-29");
        assert_eq!(months[0]["weeks"][0]["days"][0]["weekday"], "Mon");
        assert_eq!(months[0]["weeks"][0]["days"][0]["overflow"], true);
    }
}
