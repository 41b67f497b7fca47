// src/forest/ensemble.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::tree::{DecisionTree, TreeParams, class_counts, majority};
use crate::config::consts::MIN_SAMPLES_SPLIT;
use crate::progress::Progress;
use crate::{Error, Result};

#[derive(Clone, Copy, Debug)]
pub struct ForestParams {
    pub n_trees: usize,
    pub max_depth: Option<usize>,
    pub seed: u64,
}

/// Bagged CART trees; prediction is a majority vote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    n_features: usize,
    classes: Vec<u8>,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Each tree sees a bootstrap sample of the rows and draws its own
    /// seed from a master RNG, so the whole forest depends only on
    /// `params.seed` and the input order.
    pub fn fit(
        x: &[Vec<f64>],
        y: &[u8],
        params: &ForestParams,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Self> {
        let n = x.len();
        if n == 0 || n != y.len() {
            return Err(Error::TooFewRows { rows: n.min(y.len()), min: 1 });
        }
        let n_features = x[0].len();
        if let Some(bad) = x.iter().find(|row| row.len() != n_features) {
            return Err(Error::FeatureCount { expected: n_features, got: bad.len() });
        }
        for (row, values) in x.iter().enumerate() {
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(Error::NonFiniteFeature { row, feature: format!("feature {col}") });
            }
        }

        let tree_params = TreeParams {
            max_features: ((n_features as f64).sqrt() as usize).max(1),
            max_depth: params.max_depth,
            min_samples_split: MIN_SAMPLES_SPLIT,
        };

        if let Some(p) = progress.as_deref_mut() {
            p.begin(params.n_trees);
        }

        let mut master = StdRng::seed_from_u64(params.seed);
        let mut trees = Vec::with_capacity(params.n_trees);
        for step in 0..params.n_trees {
            let mut rng = StdRng::seed_from_u64(master.r#gen::<u64>());
            let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            trees.push(DecisionTree::fit(x, y, sample, &tree_params, &mut rng));

            if let Some(p) = progress.as_deref_mut() {
                p.step_done(step + 1);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        let classes = class_counts(y.iter().copied()).into_keys().collect();
        Ok(Self { n_features, classes, trees })
    }

    pub fn predict(&self, row: &[f64]) -> Result<u8> {
        if row.len() != self.n_features {
            return Err(Error::FeatureCount { expected: self.n_features, got: row.len() });
        }
        let votes = class_counts(self.trees.iter().map(|t| t.predict(row)));
        Ok(majority(&votes))
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Labels seen during fit, ascending.
    pub fn classes(&self) -> &[u8] {
        &self.classes
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Reject shapes `fit` never produces (used after deserializing).
    pub(crate) fn check(&self) -> std::result::Result<(), String> {
        if self.trees.is_empty() {
            return Err(s!("forest has no trees"));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.check(self.n_features).map_err(|e| format!("tree {i}: {e}"))?;
        }
        Ok(())
    }
}
