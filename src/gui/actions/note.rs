// src/gui/actions/note.rs
use crate::{
    gui::{app::App, dialog::Dialog},
    runner,
};

pub fn generate_note(app: &mut App) {
    let url = super::current_url(app);
    let gui = &app.state.gui;
    logf!(
        "UI: Generate note contact={:?} job={:?} url={url}",
        gui.contact_name,
        gui.job_title
    );

    let note = runner::generate_note(&app.state.options, &gui.contact_name, &gui.job_title, &url);

    app.status("Note ready");
    app.dialog = Some(Dialog::info("LinkedIn Note", note).with_copy());
}
