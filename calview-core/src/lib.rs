//! Calendar data model for rendering.
//!
//! A [`Calendar`] holds a current date, a [`Resolution`] deciding how much of
//! the calendar to show, and the events placed on it:
//! - `resolution` module for the built-in month and week grids
//! - `config` module for loading a resolution from TOML
//!
//! Rendering is left to the caller; [`Calendar::view_data`] hands back the
//! resolution's output wrapped for a templating layer.

pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod resolution;

pub use calendar::{Calendar, ViewData};
pub use config::{ResolutionConfig, ResolutionKind};
pub use error::{CalViewError, CalViewResult};
pub use event::{BasicEvent, Event};
pub use resolution::{MonthResolution, Resolution, WeekResolution};
