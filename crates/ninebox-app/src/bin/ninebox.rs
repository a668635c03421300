//! 9-Box Puzzle Game desktop application using egui/eframe.
//!
//! This is the main entry point: it launches straight into the homepage
//! window and exits when that window is closed.

use ninebox_app::{HomepageConfig, NineBoxApp, version};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.ninebox.puzzle";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting 9-Box Puzzle Game, version={}",
        version::build_version()
    );

    let config = HomepageConfig::default();
    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title(&title)
            .with_resizable(true)
            .with_inner_size(config.window_size),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(NineBoxApp::new(cc, config)))),
    )
}
