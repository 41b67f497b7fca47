// src/gui/dialog.rs
//
// Modal result/error box. Blocks the rest of the window until dismissed.

use eframe::egui;

use super::app::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
    /// Offer a "Copy" button for the body.
    pub copyable: bool,
}

impl Dialog {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: DialogKind::Info, title: title.into(), body: body.into(), copyable: false }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: DialogKind::Error, title: title.into(), body: body.into(), copyable: false }
    }

    pub fn with_copy(mut self) -> Self {
        self.copyable = true;
        self
    }
}

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = app.dialog.as_ref() else { return };

    let mut close = false;
    let mut copied = false;

    let modal = egui::Modal::new(egui::Id::new("result_dialog")).show(ctx, |ui| {
        ui.set_max_width(480.0);

        match dialog.kind {
            DialogKind::Info => ui.heading(&dialog.title),
            DialogKind::Error => ui.heading(
                egui::RichText::new(&dialog.title).color(ui.visuals().error_fg_color),
            ),
        };
        ui.separator();

        egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
            ui.label(&dialog.body);
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                close = true;
            }
            if dialog.copyable && ui.button("Copy").clicked() {
                ui.ctx().copy_text(dialog.body.clone());
                copied = true;
            }
        });
    });

    if copied {
        logd!("UI: dialog body copied ({} chars)", dialog.body.len());
        app.status("Copied to clipboard");
    }
    if close || modal.should_close() {
        app.dialog = None;
    }
}
