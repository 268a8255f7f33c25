// Barbershop Calendar Application
// Main entry point

use barbershop_calendar::ui_egui::app::{load_appointments_or_empty, load_settings_or_default};
use barbershop_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Barbershop Calendar");

    let settings = load_settings_or_default();
    let appointments = load_appointments_or_empty(&settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Barbershop Calendar"),
        ..Default::default()
    };

    eframe::run_native(
        "Barbershop Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings, appointments)))),
    )
}
