// Ramadan Portal Application
// Main entry point

use anyhow::Context;
use ramadan_portal::models::schedule::ScheduleTable;
use ramadan_portal::ui_egui::PortalApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Ramadan Portal");

    // The table is compiled in; refuse to start on malformed data.
    ScheduleTable::bundled()
        .validate()
        .context("bundled schedule failed validation")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 620.0])
            .with_title("Ramadan Portal"),
        ..Default::default()
    };

    eframe::run_native(
        "Ramadan Portal",
        options,
        Box::new(|cc| Ok(Box::new(PortalApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe terminated with an error: {err}"))
}
