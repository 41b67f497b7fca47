// src/runner.rs
//
// The user-facing actions, shared by GUI and CLI. All synchronous.

use std::path::{Path, PathBuf};

use crate::config::options::AppOptions;
use crate::forest::{self, TrainingRow};
use crate::progress::Progress;
use crate::scrape::{self, Fetch, ScrapeResult};
use crate::{Result, note, store};

#[derive(Clone, Debug, PartialEq)]
pub struct TrainReport {
    pub accuracy: f64,
    pub model_path: PathBuf,
    pub rows: usize,
    pub trees: usize,
}

pub fn scrape(opts: &AppOptions, url: &str) -> ScrapeResult {
    scrape::extract(&opts.scrape, url)
}

/// Re-scrapes `url` for its value proposition; a failed scrape still yields
/// a note, with the fallback value proposition in its slot.
pub fn generate_note(opts: &AppOptions, contact_name: &str, job_title: &str, url: &str) -> String {
    let result = scrape::extract(&opts.scrape, url);
    note_from(opts, &result, contact_name, job_title)
}

pub fn generate_note_with(
    fetcher: &dyn Fetch,
    opts: &AppOptions,
    contact_name: &str,
    job_title: &str,
    url: &str,
) -> String {
    let result = scrape::extract_with(fetcher, url);
    note_from(opts, &result, contact_name, job_title)
}

fn note_from(opts: &AppOptions, result: &ScrapeResult, contact_name: &str, job_title: &str) -> String {
    if let ScrapeResult::Failed { error } = result {
        logd!("Note: scrape failed, using fallback ({error})");
    }
    note::compose_with(
        &opts.note.template,
        contact_name,
        job_title,
        &opts.note.company_name,
        result.value_proposition(),
    )
}

/// Train on the configured table and write the model to `train.model_path`.
pub fn train_and_save(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<TrainReport> {
    let (model, accuracy) = forest::train(&opts.dataset, &opts.train, progress)?;
    store::save(&model, &opts.train.model_path)?;

    Ok(TrainReport {
        accuracy,
        model_path: opts.train.model_path.clone(),
        rows: opts.dataset.len(),
        trees: model.trees().len(),
    })
}

/// Load a saved model and classify one lead.
pub fn predict(model_path: &Path, company_size: f64, industry: u32, annual_revenue: f64) -> Result<u8> {
    let model = store::load(model_path)?;
    let row = TrainingRow::new(company_size, industry, annual_revenue, 0);
    model.predict(&row.features())
}
