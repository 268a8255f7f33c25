// UI models module
// View modes shared by the calendar core and the rendering layer

use serde::{Deserialize, Serialize};

/// Calendar view modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    Day,
    #[default]
    Week,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
        }
    }

    /// Number of day columns rendered in this mode
    pub fn day_count(&self) -> usize {
        match self {
            ViewMode::Day => 1,
            ViewMode::Week => 7,
        }
    }
}
