// src/config/state.rs
use super::options::AppOptions;

/// Text fields and toggles of the main window.
#[derive(Clone, Debug, Default)]
pub struct GuiState {
    pub url_text: String,
    pub contact_name: String,
    pub job_title: String,
    pub show_dataset: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            url_text: options.scrape.url.clone(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
