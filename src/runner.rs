//! Registry of named operations and the measure loop that drives them.
//!
//! Cases are registered up front and executed in registration order. A failing
//! case is reported in its own slot of the outcome list and does not stop the
//! cases after it.

use std::any::Any;
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::hint::black_box;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::error::{BenchError, BoxError, Result};
use crate::harness::{measure_fn, validate_iterations, BenchConfig};
use crate::schema::BenchmarkResult;

type Operation = Box<dyn Fn() -> std::result::Result<(), BoxError>>;

/// Result for one case within [`BenchmarkRunner::run`].
pub type CaseOutcome = Result<BenchmarkResult>;

fn panic_to_error(payload: Box<dyn Any + Send>) -> BoxError {
    let message = if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        return "operation panicked".into();
    };
    format!("operation panicked: {message}").into()
}

/// A named unit of work to be timed.
pub struct BenchmarkCase {
    name: String,
    operation: Operation,
}

impl BenchmarkCase {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for BenchmarkCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct BenchmarkRunner {
    cases: Vec<BenchmarkCase>,
    names: HashSet<String>,
    warmup_iters: u64,
}

impl BenchmarkRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that warms each case up according to `cfg`.
    pub fn from_config(cfg: &BenchConfig) -> Self {
        Self::new().with_warmup(cfg.warmup_iters())
    }

    pub fn with_warmup(mut self, warmup_iters: u64) -> Self {
        self.warmup_iters = warmup_iters;
        self
    }

    pub fn warmup_iters(&self) -> u64 {
        self.warmup_iters
    }

    /// Adds a case. The operation's output is fed to `black_box` after every call.
    ///
    /// A panic inside the operation is caught and treated like an `Err` return.
    pub fn register<F, T, E>(&mut self, name: impl Into<String>, operation: F) -> Result<()>
    where
        F: Fn() -> std::result::Result<T, E> + 'static,
        E: Into<BoxError>,
    {
        let name = name.into();
        if !self.names.insert(name.clone()) {
            return Err(BenchError::DuplicateName { name });
        }

        debug!(case = %name, "registered benchmark case");
        self.cases.push(BenchmarkCase {
            name,
            operation: Box::new(move || -> std::result::Result<(), BoxError> {
                let out = panic::catch_unwind(AssertUnwindSafe(&operation))
                    .map_err(panic_to_error)?
                    .map_err(Into::<BoxError>::into)?;
                black_box(out);
                Ok(())
            }),
        });
        Ok(())
    }

    pub fn register_infallible<F, T>(
        &mut self,
        name: impl Into<String>,
        operation: F,
    ) -> Result<()>
    where
        F: Fn() -> T + 'static,
    {
        self.register(name, move || Ok::<T, Infallible>(operation()))
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Case names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(BenchmarkCase::name)
    }

    /// Runs every case `iterations` times.
    ///
    /// The outer error is only returned for an invalid iteration count, before
    /// anything executes. Per-case failures land in the returned list.
    pub fn run(&self, iterations: i64) -> Result<Vec<CaseOutcome>> {
        let iters = validate_iterations(iterations)?;

        let outcomes: Vec<CaseOutcome> = self
            .cases
            .iter()
            .map(|case| self.execute(case, iters))
            .collect();

        let failed = outcomes.iter().filter(|o| o.is_err()).count();
        info!(
            cases = outcomes.len(),
            failed,
            iterations = iters,
            "benchmark run finished"
        );
        Ok(outcomes)
    }

    pub fn run_one(&self, name: &str, iterations: i64) -> Result<BenchmarkResult> {
        let iters = validate_iterations(iterations)?;
        let case = self
            .cases
            .iter()
            .find(|case| case.name == name)
            .ok_or_else(|| BenchError::UnknownCase {
                name: name.to_string(),
            })?;
        self.execute(case, iters)
    }

    fn execute(&self, case: &BenchmarkCase, iters: u64) -> Result<BenchmarkResult> {
        debug!(
            case = %case.name,
            iterations = iters,
            warmup = self.warmup_iters,
            "running benchmark case"
        );

        match measure_fn(iters, self.warmup_iters, &case.operation) {
            Ok(m) => {
                let result = BenchmarkResult::from_measured(&case.name, m);
                info!(
                    case = %result.name,
                    iterations = result.iterations,
                    avg_ns = %result.average_duration_ns(),
                    "benchmark case finished"
                );
                Ok(result)
            }
            Err(interrupted) => {
                warn!(
                    case = %case.name,
                    phase = %interrupted.phase,
                    iteration = interrupted.iteration,
                    error = %interrupted.error,
                    "benchmark case failed"
                );
                Err(BenchError::OperationFailed {
                    name: case.name.clone(),
                    phase: interrupted.phase,
                    iteration: interrupted.iteration,
                    source: interrupted.error,
                })
            }
        }
    }
}
