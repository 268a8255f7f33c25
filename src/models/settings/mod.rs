// Settings module
// User-facing configuration loaded from config.toml

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::calendar::grid::HourRange;
use crate::models::ui::ViewMode;

/// How hour labels are rendered on the time grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "light", "dark" or "system"
    pub theme: String,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    pub clock_format: ClockFormat,
    pub first_hour: u32,
    pub last_hour: u32,
    /// IANA timezone of the shop; the machine's local zone when unset
    pub timezone: Option<String>,
    pub default_view: ViewMode,
    pub hide_cancelled: bool,
    pub appointments_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            first_day_of_week: 1, // Monday
            clock_format: ClockFormat::TwelveHour,
            first_hour: 0,
            last_hour: 23,
            timezone: None,
            default_view: ViewMode::Week,
            hide_cancelled: false,
            appointments_file: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.theme.as_str(), "light" | "dark" | "system") {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        if self.first_day_of_week > 6 {
            return Err("First day of week must be 0-6 (Sunday-Saturday)".to_string());
        }

        if self.last_hour > 23 {
            return Err("Last visible hour must be 0-23".to_string());
        }

        if self.first_hour > self.last_hour {
            return Err("First visible hour must not be after the last visible hour".to_string());
        }

        Ok(())
    }

    pub fn hour_range(&self) -> HourRange {
        HourRange::new(self.first_hour, self.last_hour)
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week % 7
    }

    /// Resolve the configured timezone. Unknown names fall back to local time.
    pub fn timezone(&self) -> Option<Tz> {
        let name = self.timezone.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(err) => {
                log::warn!("Unknown timezone '{}': {}, using local time", name, err);
                None
            }
        }
    }
}
