//! Time grid rendering for the day and week views.
//!
//! Draws the day header row, then one row per visible hour with a label
//! column and one cell per visible date. Cell contents come straight from a
//! [`Placement`]; this module only draws and collects clicks.

use chrono::{NaiveDate, NaiveDateTime};
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::appointment_card::{card_rect, render_appointment_card};
use super::palette::TimeGridPalette;
use super::GridInteraction;
use crate::calendar::grid::{current_time_offset, GridCell};
use crate::calendar::placement::Placement;
use crate::models::settings::ClockFormat;

pub const TIME_LABEL_WIDTH: f32 = 64.0;
pub const COLUMN_SPACING: f32 = 1.0;
pub const SLOT_HEIGHT: f32 = 48.0;
pub const HEADER_HEIGHT: f32 = 40.0;
const MIN_COLUMN_WIDTH: f32 = 60.0;

/// Width of one day column for the available space.
pub fn column_width(available_width: f32, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    let spacing = COLUMN_SPACING * columns;
    ((available_width - TIME_LABEL_WIDTH - spacing) / columns).max(MIN_COLUMN_WIDTH)
}

/// Render the header row with one clickable header per visible date.
pub fn render_day_headers(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    col_width: f32,
    today: NaiveDate,
    palette: &TimeGridPalette,
) -> GridInteraction {
    let mut result = GridInteraction::default();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(TIME_LABEL_WIDTH + COLUMN_SPACING);

        for date in dates {
            let is_today = *date == today;
            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(col_width, HEADER_HEIGHT), Sense::click());

            let (bg, text) = if is_today {
                (palette.today_header_bg, palette.today_header_text)
            } else {
                (palette.header_bg, palette.header_text)
            };
            let painter = ui.painter();
            painter.rect_filled(rect, 4.0, bg);
            if response.hovered() {
                painter.rect_filled(rect, 4.0, palette.hover_overlay);
            }
            painter.text(
                Pos2::new(rect.center().x, rect.top() + 4.0),
                Align2::CENTER_TOP,
                date.format("%a").to_string(),
                FontId::proportional(12.0),
                text,
            );
            painter.text(
                Pos2::new(rect.center().x, rect.bottom() - 4.0),
                Align2::CENTER_BOTTOM,
                date.format("%b %d").to_string(),
                FontId::proportional(14.0),
                text,
            );

            if response
                .on_hover_text("Open this day")
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .clicked()
            {
                result.clicked_day_header = Some(*date);
            }

            ui.add_space(COLUMN_SPACING);
        }
    });

    result
}

/// Draw the current time indicator line across today's column.
fn draw_current_time_indicator(
    ui: &egui::Ui,
    grid_rect: Rect,
    dates: &[NaiveDate],
    col_width: f32,
    now: NaiveDateTime,
    offset: f32,
    palette: &TimeGridPalette,
) {
    let Some(day_index) = dates.iter().position(|d| *d == now.date()) else {
        return;
    };

    let y = grid_rect.top() + offset * grid_rect.height();
    let x_start = grid_rect.left()
        + TIME_LABEL_WIDTH
        + COLUMN_SPACING
        + day_index as f32 * (col_width + COLUMN_SPACING);
    let x_end = x_start + col_width;

    let painter = ui.painter();
    painter.circle_filled(Pos2::new(x_start - 4.0, y), 3.0, palette.now_line);
    painter.line_segment(
        [Pos2::new(x_start, y), Pos2::new(x_end, y)],
        Stroke::new(2.0, palette.now_line),
    );
}

/// Render every hour row of the placement's grid.
pub fn render_time_grid(
    ui: &mut egui::Ui,
    placement: &Placement<'_>,
    col_width: f32,
    now: NaiveDateTime,
    format: ClockFormat,
    selected_appointment: Option<i64>,
    palette: &TimeGridPalette,
) -> GridInteraction {
    let mut result = GridInteraction::default();
    let grid = placement.grid();
    let dates = grid.dates();
    let today = now.date();

    // Remove vertical spacing between rows so the now line lines up
    ui.spacing_mut().item_spacing.y = 0.0;
    let grid_top = ui.cursor().top();
    let grid_left = ui.cursor().left();

    for row in 0..grid.rows() {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            let (label_rect, _) =
                ui.allocate_exact_size(Vec2::new(TIME_LABEL_WIDTH, SLOT_HEIGHT), Sense::hover());
            if let Some(slot) = grid.slot(GridCell { day: 0, hour: row }) {
                ui.painter().text(
                    Pos2::new(label_rect.right() - 6.0, label_rect.top() + 2.0),
                    Align2::RIGHT_TOP,
                    &slot.label,
                    FontId::proportional(12.0),
                    palette.hour_label,
                );
            }
            ui.add_space(COLUMN_SPACING);

            for day in 0..dates.len() {
                let cell = GridCell { day, hour: row };
                let Some(slot) = grid.slot(cell) else {
                    continue;
                };
                let slot_index = grid.index_of(cell).unwrap_or_default();

                let (rect, response) =
                    ui.allocate_exact_size(Vec2::new(col_width, SLOT_HEIGHT), Sense::click());

                let bg = if slot.date == today {
                    palette.today_bg
                } else {
                    palette.regular_bg
                };
                let painter = ui.painter();
                painter.rect_filled(rect, 0.0, bg);
                painter.hline(rect.x_range(), rect.top(), Stroke::new(1.0, palette.hour_line));
                if slot.is_current {
                    painter.rect_stroke(rect, 0.0, Stroke::new(1.5, palette.current_hour_border));
                }

                let occupants = placement.appointments_in(cell);
                let mut card_clicked = false;
                for (index, placed) in occupants.iter().enumerate() {
                    let card = card_rect(rect, index, occupants.len());
                    let selected = selected_appointment == Some(placed.appointment.id);
                    let card_response = render_appointment_card(
                        ui, card, slot_index, placed, palette, format, now, selected,
                    );
                    if card_response.clicked() {
                        result.clicked_appointment = Some(placed.appointment.id);
                        card_clicked = true;
                    }
                }

                if !card_clicked && response.clicked() {
                    result.clicked_slot = Some((slot.date, slot.hour));
                } else if occupants.is_empty() && response.hovered() {
                    ui.painter().rect_filled(rect, 0.0, palette.hover_overlay);
                }

                if day + 1 < dates.len() {
                    ui.add_space(COLUMN_SPACING);
                }
            }
        });
    }

    if let Some(offset) = current_time_offset(now, grid.range()) {
        let grid_rect = Rect::from_min_size(
            Pos2::new(grid_left, grid_top),
            Vec2::new(
                TIME_LABEL_WIDTH + dates.len() as f32 * (col_width + COLUMN_SPACING),
                grid.rows() as f32 * SLOT_HEIGHT,
            ),
        );
        draw_current_time_indicator(ui, grid_rect, dates, col_width, now, offset, palette);
    }

    result
}
