// Staff Scheduler
// Main entry point

use staff_scheduler::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use staff_scheduler::services::settings::SettingsService;
use staff_scheduler::ui_egui::{load_settings_or_default, SchedulerApp};

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Staff Scheduler");

    let settings_service = SettingsService::default_path().map(SettingsService::new);
    let settings = load_settings_or_default(settings_service.as_ref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Staff Scheduler")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Staff Scheduler",
        options,
        Box::new(move |cc| Ok(Box::new(SchedulerApp::new(cc, settings, settings_service)))),
    )
}
