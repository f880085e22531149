use std::path::PathBuf;

use eframe::egui;
use rusty_explorer::app::RustyExplorerApp;
use rusty_explorer::settings::Settings;

fn main() -> eframe::Result {
    env_logger::init();

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([560.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(RustyExplorerApp::new(settings)))),
    )
}
