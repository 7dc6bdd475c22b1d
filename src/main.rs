#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use shadow_studio::ShadowApp;
use shadow_studio::config::WindowConfig;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let window = WindowConfig::default();
    eframe::run_native(
        window.title,
        window.native_options(),
        Box::new(|cc| Ok(Box::new(ShadowApp::new(cc)))),
    )
}
