// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::config::{consts::WINDOW_TITLE, state::AppState};

use super::{components, dialog::{self, Dialog}};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // at most one modal at a time
    pub dialog: Option<Dialog>,

    // status line; Progress sinks write here
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!(
            "Init: url={} rows={} model={}",
            state.gui.url_text,
            state.options.dataset.len(),
            state.options.train.model_path.display()
        );
        Self {
            state,
            dialog: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                components::form::draw(ui, self);

                ui.separator();

                components::dataset_table::draw(ui, self);
            });
        });

        dialog::show(ctx, self);
    }
}
