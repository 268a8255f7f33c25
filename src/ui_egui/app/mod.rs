//! eframe application hosting the appointment calendar.

use chrono_tz::Tz;

use crate::calendar::controller::ViewController;
use crate::calendar::placement::place_appointments;
use crate::models::appointment::Appointment;
use crate::models::settings::Settings;
use crate::services::appointments::{active_overlaps, resource_ids, visible_appointments};
use crate::services::settings::SettingsService;
use crate::ui_egui::dialogs::{render_appointment_details, AppointmentDetailsState};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::time_grid::{column_width, render_day_headers, render_time_grid};
use crate::ui_egui::views::toolbar::render_toolbar;
use crate::ui_egui::views::TimeGridPalette;
use crate::utils::date::now_in;

mod lifecycle;
mod navigation;

pub use lifecycle::{load_appointments_or_empty, load_settings_or_default};

/// Refresh often enough to keep the now line and current-hour highlight moving
const REPAINT_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

pub struct CalendarApp {
    settings: Settings,
    /// Where view changes are saved; `None` without a config directory
    settings_service: Option<SettingsService>,
    timezone: Option<Tz>,
    appointments: Vec<Appointment>,
    resources: Vec<String>,
    overlap_count: usize,
    resource_filter: Option<String>,
    controller: ViewController,
    details: AppointmentDetailsState,
    theme: CalendarTheme,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = now_in(self.timezone);
        let format = self.settings.clock_format;
        let selected = self.controller.state().selected_appointment;
        let palette = TimeGridPalette::from_theme(&self.theme);

        let visible = visible_appointments(
            &self.appointments,
            self.resource_filter.as_deref(),
            self.settings.hide_cancelled,
        );
        let grid = self.controller.time_grid(
            self.settings.first_day_of_week(),
            self.settings.hour_range(),
            now,
            format,
        );
        let placement = place_appointments(&visible, &grid);

        let toolbar = egui::TopBottomPanel::top("calendar_toolbar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let result = render_toolbar(
                    ui,
                    self.controller.mode(),
                    self.controller.focused_date(),
                    grid.dates(),
                    &self.resources,
                    self.resource_filter.as_deref(),
                    self.overlap_count,
                );
                ui.add_space(4.0);
                result
            })
            .inner;

        let interaction = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let col_width = column_width(ui.available_width(), grid.dates().len());
                let mut result =
                    render_day_headers(ui, grid.dates(), col_width, now.date(), &palette);
                ui.add_space(4.0);

                let grid_result = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_time_grid(ui, &placement, col_width, now, format, selected, &palette)
                    })
                    .inner;
                result.merge(grid_result);
                result
            })
            .inner;

        self.handle_toolbar(toolbar, now.date());
        self.handle_grid_interaction(interaction);

        if render_appointment_details(ctx, &mut self.details, &self.appointments, format) {
            self.controller.clear_selection();
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

impl CalendarApp {
    fn refresh_derived(&mut self) {
        self.resources = resource_ids(&self.appointments);
        let overlaps = active_overlaps(&self.appointments);
        for overlap in &overlaps {
            log::warn!(
                "Double-booking for {}: appointments {} and {}",
                overlap.resource_id,
                overlap.first,
                overlap.second
            );
        }
        self.overlap_count = overlaps.len();
    }
}
