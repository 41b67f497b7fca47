// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for url ({url})")]
    Status { status: u16, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("model encoding: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Model blob is not ours, or from a format version we can't read.
    #[error("{}: {reason}", .path.display())]
    ModelFormat { path: PathBuf, reason: String },

    #[error("need at least {min} training rows, got {rows}")]
    TooFewRows { rows: usize, min: usize },

    #[error("invalid {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("training row {row}: {feature} is not a finite number")]
    NonFiniteFeature { row: usize, feature: String },

    #[error("model expects {expected} features, got {got}")]
    FeatureCount { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
