// src/gui/components/dataset_table.rs
//
// Read-only view of the configured training table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::forest::FEATURE_NAMES;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows = &app.state.options.dataset;
    let title = format!("Training data ({} rows)", rows.len());

    let header = egui::CollapsingHeader::new(title)
        .default_open(app.state.gui.show_dataset)
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .columns(Column::auto().at_least(90.0), FEATURE_NAMES.len() + 1)
                .header(20.0, |mut header| {
                    for name in FEATURE_NAMES.iter().chain(["target"].iter()) {
                        header.col(|ui| {
                            ui.strong(*name);
                        });
                    }
                })
                .body(|mut body| {
                    for r in rows {
                        body.row(18.0, |mut row| {
                            row.col(|ui| { ui.label(r.company_size.to_string()); });
                            row.col(|ui| { ui.label(r.industry.to_string()); });
                            row.col(|ui| { ui.label(r.annual_revenue.to_string()); });
                            row.col(|ui| { ui.label(r.target.to_string()); });
                        });
                    }
                });
        });

    let open = header.body_returned.is_some();
    if open != app.state.gui.show_dataset {
        logd!("UI: dataset panel open={open}");
        app.state.gui.show_dataset = open;
    }
}
