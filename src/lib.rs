//! Microbenchmark runner for string-manipulation routines.
//!
//! Operations are registered by name on a [`BenchmarkRunner`], run a fixed
//! number of times each, and reported as [`BenchmarkResult`] values.

pub mod benches;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod runner;
pub mod schema;
pub mod transform;

pub use error::{BenchError, BoxError, Phase, Result};
pub use harness::{BenchConfig, Profile};
pub use runner::{BenchmarkCase, BenchmarkRunner, CaseOutcome};
pub use schema::BenchmarkResult;
