//! Calendar views drawn with egui.
//!
//! Views only draw and collect clicks; the app feeds the collected
//! [`GridInteraction`] into the view controller once the frame is drawn.

use chrono::NaiveDate;

pub mod appointment_card;
mod palette;
pub mod time_grid;
pub mod toolbar;

pub use palette::TimeGridPalette;

/// Clicks collected while rendering the grid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GridInteraction {
    /// Empty slot area clicked: (date, hour)
    pub clicked_slot: Option<(NaiveDate, u32)>,
    /// Day column header clicked
    pub clicked_day_header: Option<NaiveDate>,
    /// Appointment card clicked
    pub clicked_appointment: Option<i64>,
}

impl GridInteraction {
    /// Merge another result into this one; later clicks win.
    pub fn merge(&mut self, other: GridInteraction) {
        if other.clicked_slot.is_some() {
            self.clicked_slot = other.clicked_slot;
        }
        if other.clicked_day_header.is_some() {
            self.clicked_day_header = other.clicked_day_header;
        }
        if other.clicked_appointment.is_some() {
            self.clicked_appointment = other.clicked_appointment;
        }
    }

    pub fn has_actions(&self) -> bool {
        self.clicked_slot.is_some()
            || self.clicked_day_header.is_some()
            || self.clicked_appointment.is_some()
    }
}
