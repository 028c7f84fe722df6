// Availability Calendar Application
// Main entry point

use availability_calendar::ui_egui::AvailabilityApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Availability Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Availability Calendar"),
        ..Default::default()
    };

    eframe::run_native(
        "Availability Calendar",
        options,
        Box::new(|cc| Ok(Box::new(AvailabilityApp::new(cc)))),
    )
}
