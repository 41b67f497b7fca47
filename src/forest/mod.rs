// src/forest/mod.rs
//! Lead-scoring classifier.
//!
//! `train` does the whole job: seeded 80/20 split, random forest fit on the
//! train rows, accuracy on the held-out rows. Same table and same options
//! always produce the same model and the same accuracy.

mod dataset;
mod ensemble;
mod split;
mod tree;

pub use dataset::{FEATURE_NAMES, TrainingRow, to_matrix};
pub use ensemble::{ForestParams, RandomForest};
pub use split::{Split, train_test_split};
pub use tree::{DecisionTree, Node};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Error, Result};
use crate::config::options::TrainOptions;
use crate::progress::Progress;

pub fn train(
    rows: &[TrainingRow],
    opts: &TrainOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<(RandomForest, f64)> {
    opts.validate()?;
    check_finite(rows)?;

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let split = train_test_split(rows.len(), opts.test_fraction, &mut rng)?;

    let train_rows: Vec<TrainingRow> = split.train.iter().map(|&i| rows[i]).collect();
    let test_rows: Vec<TrainingRow> = split.test.iter().map(|&i| rows[i]).collect();
    logd!("Train: split train={:?} test={:?}", split.train, split.test);

    let (x, y) = to_matrix(&train_rows);
    let params = ForestParams {
        n_trees: opts.n_trees,
        max_depth: opts.max_depth,
        seed: opts.seed,
    };
    let model = RandomForest::fit(&x, &y, &params, progress)?;

    let acc = accuracy(&model, &test_rows)?;
    logf!(
        "Train: trees={} train={} test={} accuracy={:.2}",
        model.trees().len(),
        train_rows.len(),
        test_rows.len(),
        acc
    );
    Ok((model, acc))
}

/// Fraction of rows whose predicted label equals `target`. Empty → 0.0.
pub fn accuracy(model: &RandomForest, rows: &[TrainingRow]) -> Result<f64> {
    if rows.is_empty() {
        return Ok(0.0);
    }
    let mut hits = 0usize;
    for row in rows {
        if model.predict(&row.features())? == row.target {
            hits += 1;
        }
    }
    Ok(hits as f64 / rows.len() as f64)
}

/// Rows are indexed as given, before the split shuffles them.
fn check_finite(rows: &[TrainingRow]) -> Result<()> {
    for (row, r) in rows.iter().enumerate() {
        let values = r.features();
        if let Some(col) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteFeature { row, feature: FEATURE_NAMES[col].to_string() });
        }
    }
    Ok(())
}
