// src/forest/split.rs
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::consts::MIN_TRAINING_ROWS;
use crate::{Error, Result};

/// Row indices of a train/test partition. Disjoint, together cover 0..n.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle 0..n, take the first `ceil(n * test_fraction)` as test.
pub fn train_test_split(n: usize, test_fraction: f64, rng: &mut StdRng) -> Result<Split> {
    if n < MIN_TRAINING_ROWS {
        return Err(Error::TooFewRows { rows: n, min: MIN_TRAINING_ROWS });
    }

    let n_test = (n as f64 * test_fraction).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(Error::InvalidOption {
            name: "test_fraction",
            reason: format!("{test_fraction} leaves an empty split for {n} rows"),
        });
    }

    let mut idx: Vec<usize> = (0..n).collect();
    idx.shuffle(rng);
    let train = idx.split_off(n_test);

    Ok(Split { train, test: idx })
}
