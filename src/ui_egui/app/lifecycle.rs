use super::CalendarApp;
use crate::calendar::controller::ViewController;
use crate::models::appointment::Appointment;
use crate::models::settings::Settings;
use crate::services::appointments::{default_appointments_path, load_appointments};
use crate::services::settings::{default_config_path, SettingsService};
use crate::ui_egui::dialogs::AppointmentDetailsState;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::now_in;

impl CalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        appointments: Vec<Appointment>,
    ) -> Self {
        let timezone = settings.timezone();
        let today = now_in(timezone).date();
        let theme = CalendarTheme::from_name(&settings.theme);
        theme.apply_to_context(&cc.egui_ctx);

        log::info!(
            "Calendar ready: {} view, hours {}-{}, {} appointments",
            settings.default_view.label(),
            settings.hour_range().first(),
            settings.hour_range().last(),
            appointments.len()
        );

        let mut app = Self {
            controller: ViewController::new(settings.default_view, today),
            settings,
            settings_service: default_config_path().map(SettingsService::new),
            timezone,
            appointments,
            resources: Vec::new(),
            overlap_count: 0,
            resource_filter: None,
            details: AppointmentDetailsState::default(),
            theme,
        };
        app.refresh_derived();
        app
    }
}

/// Load `config.toml`, falling back to defaults when it is missing or broken.
pub fn load_settings_or_default() -> Settings {
    let Some(path) = default_config_path() else {
        log::warn!("No config directory available, using default settings");
        return Settings::default();
    };

    match SettingsService::new(&path).get() {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

/// Load the configured appointment export; an unreadable file shows an empty
/// calendar rather than failing startup.
pub fn load_appointments_or_empty(settings: &Settings) -> Vec<Appointment> {
    let Some(path) = settings
        .appointments_file
        .clone()
        .or_else(default_appointments_path)
    else {
        log::warn!("No appointments file configured");
        return Vec::new();
    };

    match load_appointments(&path, settings.timezone()) {
        Ok(appointments) => appointments,
        Err(e) => {
            log::error!("Failed to load appointments: {:#}", e);
            Vec::new()
        }
    }
}
