// src/gui/actions/scrape.rs
use crate::{
    gui::{app::App, dialog::Dialog},
    runner,
    scrape::ScrapeResult,
};

pub fn scrape(app: &mut App) {
    let url = super::current_url(app);
    logf!("UI: Scrape clicked url={url}");

    // → Blocks until the page is fetched and parsed ←
    match runner::scrape(&app.state.options, &url) {
        ScrapeResult::Page(page) => {
            app.status("Ready");
            app.dialog = Some(Dialog::info("Scraping Result", page.to_string()));
        }
        ScrapeResult::Failed { error } => {
            app.status("Scrape failed");
            app.dialog = Some(Dialog::error("Error", error));
        }
    }
}
