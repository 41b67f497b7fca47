// src/forest/dataset.rs
use serde::{Deserialize, Serialize};

pub const FEATURE_NAMES: [&str; 3] = ["company_size", "industry", "annual_revenue"];

/// One labelled lead. `industry` is a categorical code, `target` a binary label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingRow {
    pub company_size: f64,
    pub industry: u32,
    pub annual_revenue: f64,
    pub target: u8,
}

const SAMPLE_TABLE: [TrainingRow; 4] = [
    TrainingRow { company_size: 10.0, industry: 0, annual_revenue: 1.0, target: 1 },
    TrainingRow { company_size: 50.0, industry: 1, annual_revenue: 5.0, target: 1 },
    TrainingRow { company_size: 200.0, industry: 0, annual_revenue: 50.0, target: 0 },
    TrainingRow { company_size: 500.0, industry: 1, annual_revenue: 20.0, target: 1 },
];

impl TrainingRow {
    pub fn new(company_size: f64, industry: u32, annual_revenue: f64, target: u8) -> Self {
        Self { company_size, industry, annual_revenue, target }
    }

    /// Feature vector in FEATURE_NAMES order.
    pub fn features(&self) -> Vec<f64> {
        vec![self.company_size, f64::from(self.industry), self.annual_revenue]
    }

    /// The built-in table used when no dataset is configured.
    pub fn sample_table() -> Vec<TrainingRow> {
        SAMPLE_TABLE.to_vec()
    }
}

/// Split a table into a feature matrix and a label vector.
pub fn to_matrix(rows: &[TrainingRow]) -> (Vec<Vec<f64>>, Vec<u8>) {
    rows.iter().map(|r| (r.features(), r.target)).unzip()
}
