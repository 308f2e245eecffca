#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use iso_builder::IsoApp;
use iso_builder::config::SceneConfig;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = SceneConfig::default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Isometric builder")
            .with_inner_size([config.width, config.height])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "iso_builder",
        native_options,
        Box::new(move |cc| Ok(Box::new(IsoApp::new(cc, config)?))),
    )
}
