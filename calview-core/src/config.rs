//! Resolution configuration, stored as TOML.

use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{CalViewError, CalViewResult};
use crate::resolution::{MonthResolution, Resolution, WeekResolution, month_count};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionKind {
    #[default]
    Month,
    Week,
}

/// Which resolution to display and how to lay it out.
///
/// ```toml
/// kind = "month"
/// show_prev_months = 1
/// show_next_months = 1
/// start_day = "Mon"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    pub kind: ResolutionKind,
    /// Month resolution only
    pub show_prev_months: u32,
    /// Month resolution only
    pub show_next_months: u32,
    pub start_day: Weekday,
    /// Week resolution only
    pub hide_weekends: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        ResolutionConfig {
            kind: ResolutionKind::Month,
            show_prev_months: 0,
            show_next_months: 0,
            start_day: Weekday::Mon,
            hide_weekends: false,
        }
    }
}

impl ResolutionConfig {
    pub fn from_toml_str(content: &str) -> CalViewResult<Self> {
        let config: ResolutionConfig =
            toml::from_str(content).map_err(|e| CalViewError::Config(e.to_string()))?;
        month_count(config.show_prev_months, config.show_next_months)?;
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file is missing.
    pub fn load(path: &Path) -> CalViewResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            log::debug!("No resolution config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> CalViewResult<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CalViewError::Config(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn into_resolution(self) -> Box<dyn Resolution> {
        match self.kind {
            ResolutionKind::Month => Box::new(
                MonthResolution::new(self.show_prev_months, self.show_next_months)
                    .with_start_day(self.start_day),
            ),
            ResolutionKind::Week => {
                Box::new(WeekResolution::new(self.start_day).hide_weekends(self.hide_weekends))
            }
        }
    }
}
