use serde::Serialize;

use crate::harness::Measured;

/// Timing outcome for one case over a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkResult {
    pub name: String,

    /// Always >= 1.
    pub iterations: u64,
    pub warmup_iterations: u64,

    pub total_duration_ns: u128,
    pub min_duration_ns: u128,
    pub max_duration_ns: u128,
}

impl BenchmarkResult {
    pub(crate) fn from_measured(name: &str, m: Measured) -> Self {
        Self {
            name: name.to_string(),
            iterations: m.iters,
            warmup_iterations: m.warmup_iters,
            total_duration_ns: m.total_ns,
            min_duration_ns: m.min_ns,
            max_duration_ns: m.max_ns,
        }
    }

    /// `total_duration_ns / iterations`, truncated.
    pub fn average_duration_ns(&self) -> u128 {
        self.total_duration_ns / u128::from(self.iterations.max(1))
    }

    pub fn ns_per_iter(&self) -> f64 {
        (self.total_duration_ns as f64) / (self.iterations.max(1) as f64)
    }
}
