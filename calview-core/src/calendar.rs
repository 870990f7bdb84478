//! The calendar: a current date, the resolution used to display it, and the
//! events placed on it.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::date::{self, start_of_day};
use crate::error::{CalViewError, CalViewResult};
use crate::event::Event;
use crate::resolution::Resolution;

/// Data handed to a templating layer to render the calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewData {
    /// Whatever the resolution built for the current date
    pub contents: serde_json::Value,
}

/// Starting point for every calendar view.
///
/// Setters return `&mut Self` so calls can be chained:
///
/// ```
/// use calview_core::{Calendar, MonthResolution};
///
/// let mut calendar = Calendar::from_ymd(2024, 2, 14)?;
/// let view = calendar
///     .set_resolution(MonthResolution::new(1, 1))
///     .view_data()?;
///
/// assert_eq!(view.contents.as_array().map(Vec::len), Some(3));
/// # Ok::<(), calview_core::CalViewError>(())
/// ```
///
/// The attached resolution always follows the calendar's current date: it is
/// synced when attached and again whenever the date changes.
#[derive(Debug)]
pub struct Calendar {
    current_date: NaiveDateTime,
    resolution: Option<Box<dyn Resolution>>,
    events: Vec<Box<dyn Event>>,
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar::new()
    }
}

impl Calendar {
    /// A calendar positioned at the local current time.
    pub fn new() -> Self {
        Self::with_date(Local::now().naive_local())
    }

    pub fn with_date(date: NaiveDateTime) -> Self {
        Calendar {
            current_date: date,
            resolution: None,
            events: Vec::new(),
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> CalViewResult<Self> {
        Ok(Self::with_date(date::from_ymd(year, month, day)?))
    }

    /// Parse YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS
    pub fn from_date_str(s: &str) -> CalViewResult<Self> {
        Ok(Self::with_date(date::parse_date_time(s)?))
    }

    pub fn set_current_date(&mut self, date: NaiveDateTime) -> &mut Self {
        self.current_date = date;

        if let Some(resolution) = self.resolution.as_mut() {
            log::debug!("Resyncing resolution to {}", date);
            resolution.set_date_time(date);
        }

        self
    }

    pub fn current_date(&self) -> NaiveDateTime {
        self.current_date
    }

    /// Attach a resolution and sync it to the current date.
    pub fn set_resolution<R: Resolution + 'static>(&mut self, resolution: R) -> &mut Self {
        self.set_boxed_resolution(Box::new(resolution))
    }

    pub fn set_boxed_resolution(&mut self, mut resolution: Box<dyn Resolution>) -> &mut Self {
        log::debug!("Attaching resolution {:?} at {}", resolution, self.current_date);

        resolution.set_date_time(self.current_date);
        self.resolution = Some(resolution);
        self
    }

    pub fn resolution(&self) -> Option<&dyn Resolution> {
        self.resolution.as_deref()
    }

    pub fn resolution_mut(&mut self) -> Option<&mut (dyn Resolution + 'static)> {
        self.resolution.as_deref_mut()
    }

    pub fn add_event<E: Event + 'static>(&mut self, event: E) -> &mut Self {
        log::trace!("Adding event '{}'", event.title());

        self.events.push(Box::new(event));
        self
    }

    /// All events in the order they were added.
    pub fn events(&self) -> &[Box<dyn Event>] {
        &self.events
    }

    /// Events overlapping [from, to), in insertion order.
    pub fn events_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<&dyn Event> {
        self.events
            .iter()
            .map(|event| event.as_ref())
            .filter(|event| event.occurs_within(from, to))
            .collect()
    }

    /// Events touching any part of `day`.
    pub fn events_on(&self, day: NaiveDate) -> Vec<&dyn Event> {
        let from = start_of_day(day);
        match day.succ_opt() {
            Some(next) => self.events_between(from, start_of_day(next)),
            None => self.events_between(from, NaiveDateTime::MAX),
        }
    }

    /// Build the render data from the attached resolution.
    pub fn view_data(&self) -> CalViewResult<ViewData> {
        let Some(resolution) = self.resolution.as_ref() else {
            log::warn!("View data requested before a resolution was set");
            return Err(CalViewError::MissingResolution);
        };

        Ok(ViewData {
            contents: resolution.build()?,
        })
    }
}
