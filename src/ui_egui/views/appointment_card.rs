//! Appointment cards inside time grid slots.
//!
//! A slot with one occupant gets a full card (time range, client, service).
//! When several appointments share a slot each one gets a compact card: a
//! narrow column with an abbreviated label. Slots an appointment merely
//! continues through get a thin continuation bar.

use chrono::NaiveDateTime;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::TimeGridPalette;
use crate::calendar::placement::PlacedAppointment;
use crate::models::appointment::Appointment;
use crate::models::settings::ClockFormat;

const CARD_GAP: f32 = 2.0;
const ACCENT_WIDTH: f32 = 4.0;
const COMPACT_LABEL_CHARS: usize = 10;

/// Sub-rectangle for occupant `index` of `count` side-by-side cards.
pub fn card_rect(slot_rect: Rect, index: usize, count: usize) -> Rect {
    let count = count.max(1) as f32;
    let inner = slot_rect.shrink(CARD_GAP);
    let width = ((inner.width() - CARD_GAP * (count - 1.0)) / count).max(1.0);
    let left = inner.left() + index as f32 * (width + CARD_GAP);
    Rect::from_min_size(Pos2::new(left, inner.top()), Vec2::new(width, inner.height()))
}

pub fn format_time(time: NaiveDateTime, format: ClockFormat) -> String {
    match format {
        ClockFormat::TwelveHour => time.format("%-I:%M %p").to_string(),
        ClockFormat::TwentyFourHour => time.format("%H:%M").to_string(),
    }
}

/// Abbreviated card text: the first word of the title, cut to a few chars.
pub fn compact_label(appointment: &Appointment) -> String {
    let title = appointment.display_title();
    let first_word = title.split_whitespace().next().unwrap_or_default();
    if first_word.chars().count() > COMPACT_LABEL_CHARS {
        let cut: String = first_word.chars().take(COMPACT_LABEL_CHARS - 1).collect();
        format!("{}…", cut)
    } else {
        first_word.to_string()
    }
}

/// Hover text with the full appointment details.
pub fn format_appointment_tooltip(placed: &PlacedAppointment<'_>, format: ClockFormat) -> String {
    let appointment = placed.appointment;
    let mut lines = vec![
        appointment.display_title(),
        format!(
            "{} - {} ({})",
            format_time(placed.start, format),
            format_time(placed.end, format),
            placed.start.format("%A, %B %d")
        ),
    ];

    if let Some(service) = appointment.service.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("Service: {}", service));
    }
    if !appointment.resource_id.is_empty() {
        lines.push(format!("With: {}", appointment.resource_id));
    }
    lines.push(format!("Status: {}", appointment.status));

    lines.push("\nClick for details".to_string());
    lines.join("\n")
}

/// Draw one occupant of a slot and return its click response.
#[allow(clippy::too_many_arguments)]
pub fn render_appointment_card(
    ui: &mut egui::Ui,
    rect: Rect,
    slot_index: usize,
    placed: &PlacedAppointment<'_>,
    palette: &TimeGridPalette,
    format: ClockFormat,
    now: NaiveDateTime,
    selected: bool,
) -> egui::Response {
    let appointment = placed.appointment;
    let is_past = placed.end <= now;
    let color = palette.card_color(appointment, is_past);
    let text_color = palette.card_text_color(appointment, is_past);
    let painter = ui.painter().with_clip_rect(rect);

    if placed.starts_here {
        painter.rect_filled(rect, 3.0, color);

        let bar_rect = Rect::from_min_size(rect.min, Vec2::new(ACCENT_WIDTH, rect.height()));
        painter.rect_filled(bar_rect, 2.0, color.linear_multiply(0.7));

        let text_left = bar_rect.right() + 4.0;
        if placed.compact {
            painter.text(
                Pos2::new(text_left, rect.center().y),
                Align2::LEFT_CENTER,
                compact_label(appointment),
                FontId::proportional(10.0),
                text_color,
            );
        } else {
            painter.text(
                Pos2::new(text_left, rect.top() + 2.0),
                Align2::LEFT_TOP,
                format!(
                    "{} - {}",
                    format_time(placed.start, format),
                    format_time(placed.end, format)
                ),
                FontId::proportional(10.0),
                text_color,
            );
            painter.text(
                Pos2::new(text_left, rect.top() + 15.0),
                Align2::LEFT_TOP,
                appointment.display_title(),
                FontId::proportional(13.0),
                text_color,
            );
            if let Some(service) = appointment.service.as_deref() {
                painter.text(
                    Pos2::new(text_left, rect.top() + 31.0),
                    Align2::LEFT_TOP,
                    service,
                    FontId::proportional(10.0),
                    text_color,
                );
            }
        }
    } else {
        let bar_rect = Rect::from_min_size(rect.min, Vec2::new(ACCENT_WIDTH, rect.height()));
        painter.rect_filled(bar_rect, 2.0, color);

        let bg_rect = Rect::from_min_max(Pos2::new(bar_rect.right() + 2.0, rect.top()), rect.max);
        painter.rect_filled(bg_rect, 2.0, color.linear_multiply(0.3));
    }

    if selected {
        painter.rect_stroke(rect, 3.0, Stroke::new(2.0, palette.current_hour_border));
    }

    let id = egui::Id::new(("appointment_card", appointment.id, slot_index));
    ui.interact(rect, id, Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(format_appointment_tooltip(placed, format))
}
