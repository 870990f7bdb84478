//! Resolutions decide how much of the calendar to show and turn the current
//! date into grid cells for rendering.
//!
//! A `Calendar` only ever talks to the [`Resolution`] trait; the payload
//! returned by `build` is opaque JSON so renderers and resolutions can agree
//! on a shape without the calendar knowing about it.

mod grid;
mod month;
mod week;

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::CalViewResult;

pub use grid::{Day, Month, Week};
pub use month::{MAX_SURROUNDING_MONTHS, MonthResolution};
pub(crate) use month::month_count;
pub use week::WeekResolution;

pub trait Resolution: fmt::Debug {
    /// Point the resolution at a new date.
    fn set_date_time(&mut self, date: NaiveDateTime);

    /// The date the resolution was last pointed at, if any.
    fn date_time(&self) -> Option<NaiveDateTime>;

    /// Produce the render payload for the current date.
    fn build(&self) -> CalViewResult<serde_json::Value>;
}

impl<R: Resolution + ?Sized> Resolution for Box<R> {
    fn set_date_time(&mut self, date: NaiveDateTime) {
        (**self).set_date_time(date)
    }

    fn date_time(&self) -> Option<NaiveDateTime> {
        (**self).date_time()
    }

    fn build(&self) -> CalViewResult<serde_json::Value> {
        (**self).build()
    }
}
