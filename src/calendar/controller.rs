//! View controller for the appointment calendar.
//!
//! Owns the [`ViewState`] and applies user interactions as explicit
//! transitions. Anything the host application must react to (opening the
//! details dialog, a new focused date, a clicked slot) is forwarded through
//! [`CalendarHost`].

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::grid::{HourRange, TimeGrid};
use crate::models::settings::ClockFormat;
use crate::models::ui::ViewMode;

/// Collaborator notified of calendar interactions.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarHost {
    /// The focused date changed.
    fn date_selected(&mut self, _date: NaiveDate) {}

    /// An appointment's detail view should open.
    fn view_appointment(&mut self, id: i64);

    /// An empty area of a slot was clicked.
    fn slot_selected(&mut self, _date: NaiveDate, _hour: u32) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub focused_date: NaiveDate,
    pub selected_appointment: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new(mode: ViewMode, focused_date: NaiveDate) -> Self {
        Self {
            state: ViewState {
                mode,
                focused_date,
                selected_appointment: None,
            },
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode
    }

    pub fn focused_date(&self) -> NaiveDate {
        self.state.focused_date
    }

    /// Move focus to `date`. Mode and selection are left as they are.
    pub fn select_date(&mut self, date: NaiveDate, host: &mut dyn CalendarHost) {
        self.state.focused_date = date;
        host.date_selected(date);
    }

    /// Day header click: switch to the Day view anchored at `date`.
    pub fn select_day_header(&mut self, date: NaiveDate, host: &mut dyn CalendarHost) {
        log::debug!("Day header {} selected, switching to day view", date);
        self.state.mode = ViewMode::Day;
        self.select_date(date, host);
    }

    /// Remember the selection and hand the id to the host's details view.
    pub fn view_appointment(&mut self, id: i64, host: &mut dyn CalendarHost) {
        self.state.selected_appointment = Some(id);
        host.view_appointment(id);
    }

    pub fn slot_clicked(&mut self, date: NaiveDate, hour: u32, host: &mut dyn CalendarHost) {
        host.slot_selected(date, hour);
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_appointment = None;
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.state.mode = mode;
    }

    pub fn navigate_previous(&mut self) {
        self.state.focused_date = self.state.focused_date - self.step();
    }

    pub fn navigate_next(&mut self) {
        self.state.focused_date = self.state.focused_date + self.step();
    }

    /// Jump to a date (usually today) without notifying the host.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.state.focused_date = date;
    }

    fn step(&self) -> Duration {
        match self.state.mode {
            ViewMode::Day => Duration::days(1),
            ViewMode::Week => Duration::weeks(1),
        }
    }

    /// Grid for the current state.
    pub fn time_grid(
        &self,
        first_day_of_week: u8,
        range: HourRange,
        now: NaiveDateTime,
        format: ClockFormat,
    ) -> TimeGrid {
        TimeGrid::new(
            self.state.mode,
            self.state.focused_date,
            first_day_of_week,
            range,
            now,
            format,
        )
    }
}
