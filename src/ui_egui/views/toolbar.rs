//! Navigation toolbar above the time grid.

use chrono::NaiveDate;

use crate::models::ui::ViewMode;

/// What the user asked for in the toolbar this frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToolbarResult {
    pub previous: bool,
    pub next: bool,
    pub today: bool,
    pub mode: Option<ViewMode>,
    pub picked_date: Option<NaiveDate>,
    /// `Some(None)` clears the staff filter
    pub resource_filter: Option<Option<String>>,
}

/// Heading for the visible range.
pub fn range_title(mode: ViewMode, dates: &[NaiveDate]) -> String {
    match (mode, dates.first(), dates.last()) {
        (_, None, _) | (_, _, None) => String::new(),
        (ViewMode::Day, Some(day), _) => day.format("%A, %B %-d, %Y").to_string(),
        (ViewMode::Week, Some(first), Some(last)) => format!(
            "{} - {}",
            first.format("%b %-d"),
            last.format("%b %-d, %Y")
        ),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_toolbar(
    ui: &mut egui::Ui,
    mode: ViewMode,
    focused: NaiveDate,
    dates: &[NaiveDate],
    resources: &[String],
    resource_filter: Option<&str>,
    overlap_count: usize,
) -> ToolbarResult {
    let mut result = ToolbarResult::default();

    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous").clicked() {
            result.previous = true;
        }
        if ui.button("Today").clicked() {
            result.today = true;
        }
        if ui.button("▶").on_hover_text("Next").clicked() {
            result.next = true;
        }

        let mut picked = focused;
        if ui
            .add(egui_extras::DatePickerButton::new(&mut picked).id_source("toolbar_date_picker"))
            .changed()
        {
            result.picked_date = Some(picked);
        }

        ui.separator();
        for candidate in [ViewMode::Day, ViewMode::Week] {
            if ui
                .selectable_label(mode == candidate, candidate.label())
                .clicked()
                && mode != candidate
            {
                result.mode = Some(candidate);
            }
        }

        ui.separator();
        let mut selected = resource_filter.map(str::to_string);
        let before = selected.clone();
        egui::ComboBox::from_id_source("resource_filter")
            .selected_text(selected.as_deref().unwrap_or("All staff"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, None, "All staff");
                for resource in resources {
                    ui.selectable_value(&mut selected, Some(resource.clone()), resource.as_str());
                }
            });
        if selected != before {
            result.resource_filter = Some(selected);
        }

        if overlap_count > 0 {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("⚠ {} double-booking(s)", overlap_count))
                    .color(egui::Color32::from_rgb(230, 140, 40)),
            );
        }

        ui.separator();
        ui.heading(range_title(mode, dates));
    });

    result
}
