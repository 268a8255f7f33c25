use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

fn dim(color: Color32, factor: f32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        alpha,
    )
}

#[derive(Clone, Copy)]
pub struct TimeGridPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub today_header_bg: Color32,
    pub today_header_text: Color32,
    pub hour_label: Color32,
    pub regular_bg: Color32,
    pub today_bg: Color32,
    pub current_hour_border: Color32,
    pub hour_line: Color32,
    pub hover_overlay: Color32,
    pub now_line: Color32,
    pub card_default: Color32,
    pub card_text: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            header_bg: blend(theme.app_background, theme.calendar_background, 0.5),
            header_text: theme.text_primary,
            today_header_bg: theme.today_border,
            today_header_text: if theme.is_dark {
                Color32::from_rgb(20, 20, 20)
            } else {
                Color32::from_rgb(245, 245, 245)
            },
            hour_label: theme.text_secondary,
            regular_bg: theme.day_background,
            today_bg: theme.today_background,
            current_hour_border: theme.today_border,
            hour_line: theme.day_border,
            hover_overlay: with_alpha(theme.today_border, if theme.is_dark { 80 } else { 50 }),
            now_line: Color32::from_rgb(255, 100, 100),
            card_default: theme.appointment_default,
            card_text: Color32::WHITE,
        }
    }

    /// Card fill for an appointment. Past and completed appointments are
    /// dimmed, cancelled ones more strongly.
    pub fn card_color(&self, appointment: &Appointment, is_past: bool) -> Color32 {
        let base = appointment
            .color
            .as_deref()
            .and_then(|hex| CalendarTheme::hex_to_color(hex).ok())
            .unwrap_or(self.card_default);

        match appointment.status {
            AppointmentStatus::Cancelled => dim(base, 0.3, 110),
            AppointmentStatus::Completed => dim(base, 0.5, 160),
            AppointmentStatus::Booked if is_past => dim(base, 0.4, 140),
            AppointmentStatus::Booked => base,
        }
    }

    pub fn card_text_color(&self, appointment: &Appointment, is_past: bool) -> Color32 {
        if is_past || appointment.status != AppointmentStatus::Booked {
            Color32::from_rgba_unmultiplied(255, 255, 255, 170)
        } else {
            self.card_text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn appointment() -> Appointment {
        let start = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Appointment::new(1, start, 30, "alex")
    }

    #[test]
    fn test_card_color_uses_record_color() {
        let palette = TimeGridPalette::from_theme(&CalendarTheme::light());
        let colored = appointment().with_color("#AA3355");
        assert_eq!(palette.card_color(&colored, false), Color32::from_rgb(0xAA, 0x33, 0x55));
    }

    #[test]
    fn test_card_color_falls_back_on_bad_hex() {
        let palette = TimeGridPalette::from_theme(&CalendarTheme::light());
        let colored = appointment().with_color("red");
        assert_eq!(palette.card_color(&colored, false), palette.card_default);
    }

    #[test]
    fn test_cancelled_and_past_cards_are_dimmed() {
        let palette = TimeGridPalette::from_theme(&CalendarTheme::dark());
        let booked = appointment();
        let cancelled = appointment().with_status(AppointmentStatus::Cancelled);

        assert_ne!(palette.card_color(&booked, true), palette.card_default);
        assert_ne!(palette.card_color(&cancelled, false), palette.card_default);
        assert_eq!(palette.card_text_color(&booked, false), Color32::WHITE);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
