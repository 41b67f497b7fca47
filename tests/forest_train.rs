// tests/forest_train.rs
use lead_agent::Error;
use lead_agent::config::options::TrainOptions;
use lead_agent::forest::{self, TrainingRow};
use lead_agent::progress::Progress;
use lead_agent::store;

fn small_opts() -> TrainOptions {
    TrainOptions { n_trees: 25, ..TrainOptions::default() }
}

/// Every feature separates the classes, so any split generalizes.
fn separable_table() -> Vec<TrainingRow> {
    let mut rows = Vec::new();
    for i in 0..10 {
        let i = i as f64;
        rows.push(TrainingRow::new(10.0 + i, 0, 1.0 + i, 0));
        rows.push(TrainingRow::new(500.0 + i, 1, 80.0 + i, 1));
    }
    rows
}

#[test]
fn sample_table_trains() {
    let rows = TrainingRow::sample_table();
    let (model, acc) = forest::train(&rows, &TrainOptions::default(), None).unwrap();
    assert!((0.0..=1.0).contains(&acc));
    assert_eq!(model.trees().len(), 100);
    assert_eq!(model.n_features(), 3);
}

#[test]
fn training_is_deterministic() {
    let rows = TrainingRow::sample_table();
    let (a, acc_a) = forest::train(&rows, &small_opts(), None).unwrap();
    let (b, acc_b) = forest::train(&rows, &small_opts(), None).unwrap();

    assert_eq!(a, b);
    assert_eq!(acc_a, acc_b);
    assert_eq!(store::encode(&a).unwrap(), store::encode(&b).unwrap());
}

#[test]
fn different_seed_may_differ_but_stays_valid() {
    let rows = separable_table();
    let opts = TrainOptions { seed: 7, ..small_opts() };
    let (_, acc) = forest::train(&rows, &opts, None).unwrap();
    assert!((0.0..=1.0).contains(&acc));
}

#[test]
fn non_finite_feature_is_rejected() {
    let mut rows = separable_table();
    rows[3].company_size = f64::NAN;
    rows[7].annual_revenue = f64::INFINITY;

    let err = forest::train(&rows, &small_opts(), None).unwrap_err();
    match err {
        Error::NonFiniteFeature { row, feature } => {
            assert_eq!(row, 3);
            assert_eq!(feature, "company_size");
        }
        other => panic!("expected NonFiniteFeature, got {other:?}"),
    }
}

#[test]
fn separable_data_scores_perfectly() {
    let (model, acc) = forest::train(&separable_table(), &small_opts(), None).unwrap();
    assert_eq!(acc, 1.0);
    assert_eq!(model.classes(), &[0, 1]);
    assert_eq!(model.predict(&[12.0, 0.0, 3.0]).unwrap(), 0);
    assert_eq!(model.predict(&[505.0, 1.0, 85.0]).unwrap(), 1);
}

#[test]
fn too_few_rows_is_an_error() {
    let rows = vec![TrainingRow::new(1.0, 0, 1.0, 1)];
    let err = forest::train(&rows, &small_opts(), None).unwrap_err();
    assert!(matches!(err, Error::TooFewRows { rows: 1, .. }));

    let err = forest::train(&[], &small_opts(), None).unwrap_err();
    assert!(matches!(err, Error::TooFewRows { rows: 0, .. }));
}

#[test]
fn bad_options_are_rejected() {
    let rows = TrainingRow::sample_table();
    for opts in [
        TrainOptions { test_fraction: 0.0, ..small_opts() },
        TrainOptions { test_fraction: 1.0, ..small_opts() },
        TrainOptions { n_trees: 0, ..small_opts() },
        TrainOptions { max_depth: Some(0), ..small_opts() },
    ] {
        let err = forest::train(&rows, &opts, None).unwrap_err();
        assert!(matches!(err, Error::InvalidOption { .. }), "{opts:?}");
    }
}

#[test]
fn depth_limit_is_respected() {
    let opts = TrainOptions { max_depth: Some(1), ..small_opts() };
    let (model, _) = forest::train(&separable_table(), &opts, None).unwrap();
    // depth 1: a root split and two leaves at most
    assert!(model.trees().iter().all(|t| t.node_count() <= 3));
}

#[test]
fn wrong_feature_count_is_an_error() {
    let (model, _) = forest::train(&separable_table(), &small_opts(), None).unwrap();
    let err = model.predict(&[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::FeatureCount { expected: 3, got: 2 }));
}

#[derive(Default)]
struct Counter {
    total: usize,
    steps: Vec<usize>,
    finished: bool,
}

impl Progress for Counter {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn step_done(&mut self, step: usize) { self.steps.push(step); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_ticks_once_per_tree() {
    let mut counter = Counter::default();
    forest::train(&TrainingRow::sample_table(), &small_opts(), Some(&mut counter)).unwrap();

    assert_eq!(counter.total, 25);
    assert_eq!(counter.steps, (1..=25).collect::<Vec<_>>());
    assert!(counter.finished);
}
