// src/forest/tree.rs
//! CART classification tree with Gini impurity.
//!
//! Nodes live in a flat vector; the root is node 0 and every child index is
//! greater than its parent's, so prediction always terminates on a
//! well-formed tree. At each split only `max_features` randomly chosen
//! features are scored, falling through to the rest only when none of those
//! admits a split.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Leaf { class: u8 },
    /// Rows with `x[feature] <= threshold` go left.
    Split { feature: usize, threshold: f64, left: usize, right: usize },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TreeParams {
    pub max_features: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
}

struct Candidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

pub(crate) type ClassCounts = BTreeMap<u8, usize>;

impl DecisionTree {
    /// Fit on the rows of `x`/`y` listed in `sample` (repeats allowed).
    pub(crate) fn fit(
        x: &[Vec<f64>],
        y: &[u8],
        sample: Vec<usize>,
        params: &TreeParams,
        rng: &mut StdRng,
    ) -> Self {
        let mut tree = DecisionTree { nodes: Vec::new() };
        tree.grow(x, y, sample, 0, params, rng);
        tree
    }

    pub fn predict(&self, row: &[f64]) -> u8 {
        let mut i = 0;
        loop {
            match &self.nodes[i] {
                Node::Leaf { class } => return *class,
                Node::Split { feature, threshold, left, right } => {
                    i = if row[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Structural check for trees that did not come from `fit`.
    pub(crate) fn check(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(s!("empty tree"));
        }
        let n = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            if let Node::Split { feature, left, right, .. } = node {
                if *feature >= n_features {
                    return Err(format!("node {i}: feature {feature} out of range"));
                }
                if *left <= i || *right <= i || *left >= n || *right >= n {
                    return Err(format!("node {i}: bad child index"));
                }
            }
        }
        Ok(())
    }

    fn grow(
        &mut self,
        x: &[Vec<f64>],
        y: &[u8],
        idx: Vec<usize>,
        depth: usize,
        params: &TreeParams,
        rng: &mut StdRng,
    ) -> usize {
        let id = self.nodes.len();
        let counts = class_counts(idx.iter().map(|&i| y[i]));
        self.nodes.push(Node::Leaf { class: majority(&counts) });

        let pure = counts.len() <= 1;
        let at_depth = params.max_depth.is_some_and(|d| depth >= d);
        if pure || at_depth || idx.len() < params.min_samples_split {
            return id;
        }

        let Some(split) = best_split(x, y, &idx, &counts, params.max_features, rng) else {
            return id;
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = idx
            .iter()
            .partition(|&&i| x[i][split.feature] <= split.threshold);

        let left = self.grow(x, y, left_idx, depth + 1, params, rng);
        let right = self.grow(x, y, right_idx, depth + 1, params, rng);
        self.nodes[id] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        id
    }
}

pub(crate) fn class_counts(labels: impl Iterator<Item = u8>) -> ClassCounts {
    let mut counts = ClassCounts::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    counts
}

/// Most frequent class; ties go to the smallest label.
pub(crate) fn majority(counts: &ClassCounts) -> u8 {
    let mut best = (0u8, 0usize);
    for (&class, &n) in counts {
        if n > best.1 {
            best = (class, n);
        }
    }
    best.0
}

fn gini(counts: impl Iterator<Item = usize>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    1.0 - counts.map(|c| (c as f64 / n).powi(2)).sum::<f64>()
}

fn best_split(
    x: &[Vec<f64>],
    y: &[u8],
    idx: &[usize],
    totals: &ClassCounts,
    max_features: usize,
    rng: &mut StdRng,
) -> Option<Candidate> {
    let n_features = x[idx[0]].len();
    let mut order: Vec<usize> = (0..n_features).collect();
    order.shuffle(rng);

    let mut best: Option<Candidate> = None;
    for (visited, &feature) in order.iter().enumerate() {
        if visited >= max_features && best.is_some() {
            break;
        }
        if let Some(c) = best_split_on(x, y, idx, totals, feature) {
            if best.as_ref().is_none_or(|b| c.impurity < b.impurity) {
                best = Some(c);
            }
        }
    }
    best
}

/// Lowest weighted child impurity over midpoints between distinct values.
fn best_split_on(
    x: &[Vec<f64>],
    y: &[u8],
    idx: &[usize],
    totals: &ClassCounts,
    feature: usize,
) -> Option<Candidate> {
    let mut vals: Vec<(f64, u8)> = idx.iter().map(|&i| (x[i][feature], y[i])).collect();
    vals.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n = vals.len();
    let mut left = ClassCounts::new();
    let mut best: Option<Candidate> = None;

    for k in 1..n {
        *left.entry(vals[k - 1].1).or_default() += 1;

        let (lo, hi) = (vals[k - 1].0, vals[k].0);
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            continue;
        }

        let left_gini = gini(left.values().copied(), k);
        let right_gini = gini(
            totals.iter().map(|(c, &t)| t - left.get(c).copied().unwrap_or(0)),
            n - k,
        );
        let impurity = (k as f64 * left_gini + (n - k) as f64 * right_gini) / n as f64;

        if best.as_ref().is_none_or(|b| impurity < b.impurity) {
            let mid = lo + (hi - lo) / 2.0;
            let threshold = if mid < hi { mid } else { lo };
            best = Some(Candidate { feature, threshold, impurity });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn params() -> TreeParams {
        TreeParams { max_features: 1, max_depth: None, min_samples_split: 2 }
    }

    #[test]
    fn separable_data_is_fit_exactly() {
        let x = vec![vec![1.0], vec![2.0], vec![10.0], vec![11.0]];
        let y = vec![0, 0, 1, 1];
        let mut rng = StdRng::seed_from_u64(7);
        let tree = DecisionTree::fit(&x, &y, vec![0, 1, 2, 3], &params(), &mut rng);

        for (row, label) in x.iter().zip(&y) {
            assert_eq!(tree.predict(row), *label);
        }
        assert_eq!(tree.node_count(), 3);
        assert!(tree.check(1).is_ok());
    }

    #[test]
    fn majority_breaks_ties_low() {
        let counts = class_counts([1u8, 0, 1, 0].into_iter());
        assert_eq!(majority(&counts), 0);
    }

    #[test]
    fn constant_feature_yields_leaf() {
        let x = vec![vec![3.0], vec![3.0]];
        let y = vec![0, 1];
        let mut rng = StdRng::seed_from_u64(1);
        let tree = DecisionTree::fit(&x, &y, vec![0, 1], &params(), &mut rng);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn nan_values_never_split() {
        let x = vec![vec![f64::NAN], vec![f64::NAN], vec![f64::NAN]];
        let y = vec![0, 1, 0];
        let mut rng = StdRng::seed_from_u64(1);
        let tree = DecisionTree::fit(&x, &y, vec![0, 1, 2], &params(), &mut rng);
        assert_eq!(tree.node_count(), 1);
    }
}
