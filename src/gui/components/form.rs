// src/gui/components/form.rs
//
// URL field, note frame (contact / job title), and the three action buttons.
// Clicks are collected first and dispatched after the UI borrow ends.

use eframe::egui;

use crate::gui::{actions, app::App};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Clicked { Scrape, Note, Train }

const FIELD_W: f32 = 360.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked = None;

    ui.vertical_centered(|ui| {
        let gui = &mut app.state.gui;

        // --- URL + Scrape ---
        ui.label("Enter MadKudu Website URL:");
        ui.add(egui::TextEdit::singleline(&mut gui.url_text).desired_width(FIELD_W));
        if ui.button("Scrape Website").clicked() {
            clicked = Some(Clicked::Scrape);
        }

        ui.add_space(10.0);

        // --- Note frame ---
        ui.label(egui::RichText::new("Generate LinkedIn Note").strong());
        egui::Grid::new("note_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Contact Name:");
                ui.add(egui::TextEdit::singleline(&mut gui.contact_name).desired_width(FIELD_W * 0.6));
                ui.end_row();

                ui.label("Job Title:");
                ui.add(egui::TextEdit::singleline(&mut gui.job_title).desired_width(FIELD_W * 0.6));
                ui.end_row();
            });
        if ui.button("Generate Note").clicked() {
            clicked = Some(Clicked::Note);
        }

        ui.add_space(10.0);

        // --- Training ---
        if ui.button("Train ML Model").clicked() {
            clicked = Some(Clicked::Train);
        }
    });

    match clicked {
        Some(Clicked::Scrape) => actions::scrape(app),
        Some(Clicked::Note) => actions::generate_note(app),
        Some(Clicked::Train) => actions::train(app),
        None => {}
    }
}
