// src/gui/actions/train.rs
use crate::{
    gui::{app::App, dialog::Dialog, progress::GuiProgress},
    runner,
};

pub fn train(app: &mut App) {
    logf!("UI: Train clicked rows={}", app.state.options.dataset.len());

    let mut prog = GuiProgress::new(app.status.clone());

    match runner::train_and_save(&app.state.options, Some(&mut prog)) {
        Ok(report) => {
            app.dialog = Some(Dialog::info(
                "ML Model",
                format!("Model trained and saved!\nAccuracy: {:.2}", report.accuracy),
            ));
        }
        Err(e) => {
            loge!("Train: {e}");
            app.status("Training failed");
            app.dialog = Some(Dialog::error("Error", format!("Training failed: {e}")));
        }
    }
}
