//! Appointment details dialog.
//!
//! This is the host-side collaborator of the view controller: it receives
//! the forwarded appointment id and owns its own visibility.

use chrono::NaiveDate;
use egui::RichText;

use crate::calendar::controller::CalendarHost;
use crate::models::appointment::Appointment;
use crate::models::settings::ClockFormat;
use crate::ui_egui::views::appointment_card::format_time;

/// State for the details dialog plus the other host notifications
#[derive(Debug, Default)]
pub struct AppointmentDetailsState {
    /// Appointment whose details are open
    pub open_appointment: Option<i64>,
    /// Last empty slot the user clicked
    pub last_slot: Option<(NaiveDate, u32)>,
}

impl AppointmentDetailsState {
    pub fn is_open(&self) -> bool {
        self.open_appointment.is_some()
    }

    pub fn close(&mut self) {
        self.open_appointment = None;
    }
}

impl CalendarHost for AppointmentDetailsState {
    fn date_selected(&mut self, date: NaiveDate) {
        log::debug!("Focused date changed to {}", date);
    }

    fn view_appointment(&mut self, id: i64) {
        log::info!("Opening details for appointment {}", id);
        self.open_appointment = Some(id);
    }

    fn slot_selected(&mut self, date: NaiveDate, hour: u32) {
        log::info!("Slot {} {:02}:00 selected", date, hour);
        self.last_slot = Some((date, hour));
    }
}

/// Render the details dialog. Returns true when the user closed it this frame.
pub fn render_appointment_details(
    ctx: &egui::Context,
    state: &mut AppointmentDetailsState,
    appointments: &[Appointment],
    format: ClockFormat,
) -> bool {
    let Some(id) = state.open_appointment else {
        return false;
    };

    let Some(appointment) = appointments.iter().find(|a| a.id == id) else {
        log::warn!("Appointment {} is no longer available, closing details", id);
        state.close();
        return true;
    };

    let mut dialog_open = true;
    let mut close_clicked = false;

    egui::Window::new("Appointment details")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(appointment.display_title()).size(18.0).strong());
            ui.add_space(6.0);

            egui::Grid::new("appointment_details_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("When");
                    match appointment.window() {
                        Ok((start, end)) => ui.label(format!(
                            "{}, {} - {}",
                            start.format("%a %b %-d"),
                            format_time(start, format),
                            format_time(end, format)
                        )),
                        Err(err) => ui.label(err.to_string()),
                    };
                    ui.end_row();

                    ui.label("Duration");
                    ui.label(format!("{} min", appointment.duration_minutes));
                    ui.end_row();

                    ui.label("Staff");
                    ui.label(appointment.resource_id.as_str());
                    ui.end_row();

                    if let Some(service) = appointment.service.as_deref() {
                        ui.label("Service");
                        ui.label(service);
                        ui.end_row();
                    }

                    ui.label("Status");
                    ui.label(appointment.status.to_string());
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !dialog_open || close_clicked {
        state.close();
        return true;
    }
    false
}
