use super::CalendarApp;
use crate::ui_egui::views::toolbar::ToolbarResult;
use crate::ui_egui::views::GridInteraction;
use crate::models::ui::ViewMode;
use chrono::NaiveDate;

impl CalendarApp {
    pub(super) fn handle_toolbar(&mut self, toolbar: ToolbarResult, today: NaiveDate) {
        if toolbar.previous {
            self.controller.navigate_previous();
        }
        if toolbar.next {
            self.controller.navigate_next();
        }
        if toolbar.today {
            self.controller.jump_to(today);
        }
        if let Some(mode) = toolbar.mode {
            self.controller.set_mode(mode);
            self.remember_view(mode);
        }
        if let Some(date) = toolbar.picked_date {
            self.controller.select_date(date, &mut self.details);
        }
        if let Some(filter) = toolbar.resource_filter {
            log::debug!("Staff filter set to {:?}", filter);
            self.resource_filter = filter;
        }
    }

    fn remember_view(&mut self, mode: ViewMode) {
        let Some(service) = &self.settings_service else {
            return;
        };
        if let Err(e) = service.remember_view(&mut self.settings, mode) {
            log::warn!("Failed to save default view: {:#}", e);
        }
    }

    /// Dispatch grid clicks in a fixed order: slot, day header, appointment.
    pub(super) fn handle_grid_interaction(&mut self, interaction: GridInteraction) {
        if !interaction.has_actions() {
            return;
        }

        if let Some((date, hour)) = interaction.clicked_slot {
            self.controller.slot_clicked(date, hour, &mut self.details);
        }
        if let Some(date) = interaction.clicked_day_header {
            self.controller.select_day_header(date, &mut self.details);
        }
        if let Some(id) = interaction.clicked_appointment {
            self.controller.view_appointment(id, &mut self.details);
        }
    }
}
