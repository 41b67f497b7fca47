// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::forest::TrainingRow;
use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub note: NoteOptions,
    pub train: TrainOptions,
    /// Training table. Defaults to the built-in four rows.
    pub dataset: Vec<TrainingRow>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            note: NoteOptions::default(),
            train: TrainOptions::default(),
            dataset: TrainingRow::sample_table(),
        }
    }
}

impl AppOptions {
    /// Defaults, overlaid by the TOML file at `path` (if present),
    /// overlaid by `LEAD_AGENT__SECTION__KEY` environment variables.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let opts: AppOptions = settings.try_deserialize()?;
        logf!(
            "Config: path={} url={} rows={} model={}",
            path.display(),
            opts.scrape.url,
            opts.dataset.len(),
            opts.train.model_path.display()
        );
        Ok(opts)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ScrapeOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteOptions {
    pub company_name: String,
    /// `{contact_name}`, `{job_title}`, `{company_name}`, `{value_proposition}`
    pub template: String,
}

impl Default for NoteOptions {
    fn default() -> Self {
        Self {
            company_name: s!(DEFAULT_COMPANY),
            template: s!(NOTE_TEMPLATE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainOptions {
    pub seed: u64,
    pub test_fraction: f64,
    pub n_trees: usize,
    pub max_depth: Option<usize>,
    pub model_path: PathBuf,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            seed: SEED,
            test_fraction: TEST_FRACTION,
            n_trees: N_TREES,
            max_depth: None,
            model_path: PathBuf::from(DEFAULT_MODEL_FILE),
        }
    }
}

impl TrainOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(Error::InvalidOption {
                name: "test_fraction",
                reason: format!("{} is not in (0, 1)", self.test_fraction),
            });
        }
        if self.n_trees == 0 {
            return Err(Error::InvalidOption { name: "n_trees", reason: s!("must be > 0") });
        }
        if self.max_depth == Some(0) {
            return Err(Error::InvalidOption { name: "max_depth", reason: s!("must be > 0") });
        }
        Ok(())
    }
}
