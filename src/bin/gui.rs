// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use lead_agent::{
    config::{
        consts::{DEFAULT_CONFIG_FILE, WINDOW_H, WINDOW_TITLE, WINDOW_W},
        options::AppOptions,
        state::AppState,
    },
    gui, log,
};

fn main() {
    if let Err(e) = log::init(&log::default_path()) {
        eprintln!("Warning: debug log unavailable: {e}");
    }

    let app_options = match AppOptions::load(Path::new(DEFAULT_CONFIG_FILE)) {
        Ok(o) => o,
        Err(e) => {
            lead_agent::loge!("Config: {e}");
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppState::new(app_options)) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
