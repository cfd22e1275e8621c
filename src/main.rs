#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sketchpad::PaintApp;
use sketchpad::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("sketchpad")
            .with_inner_size([DEFAULT_WIDTH as f32 + 20.0, DEFAULT_HEIGHT as f32 + 80.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    )
}
