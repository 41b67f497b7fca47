// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Each action runs synchronously on the UI thread and ends in a dialog.

mod note;    // src/gui/actions/note.rs
mod scrape;  // src/gui/actions/scrape.rs
mod train;   // src/gui/actions/train.rs

pub use note::generate_note;
pub use scrape::scrape;
pub use train::train;

use crate::gui::app::App;

#[inline]
pub(super) fn current_url(app: &App) -> String {
    s!(app.state.gui.url_text.trim())
}
