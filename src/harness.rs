use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::error::{BenchError, Phase, Result};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Quick,
    Full,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Quick => "quick",
            Profile::Full => "full",
        }
    }
}

/// Run parameters. Explicit `warmup_iters`/`iters` override the profile defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub profile: Profile,
    pub seed: u64,
    pub warmup_iters: Option<u64>,
    pub iters: Option<i64>,
}

impl BenchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    pub fn warmup_iters(&self) -> u64 {
        self.warmup_iters.unwrap_or(match self.profile {
            Profile::Quick => 32,
            Profile::Full => 200,
        })
    }

    /// Measured iterations per case. Not validated here; the runner rejects values < 1.
    pub fn iters(&self) -> i64 {
        self.iters.unwrap_or(match self.profile {
            Profile::Quick => 300,
            Profile::Full => 3_000,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measured {
    pub iters: u64,
    pub warmup_iters: u64,
    pub total_ns: u128,
    pub min_ns: u128,
    pub max_ns: u128,
}

/// An operation error together with where in the run it happened.
#[derive(Debug)]
pub struct Interrupted<E> {
    pub phase: Phase,
    pub iteration: u64,
    pub error: E,
}

/// Converts a caller-supplied iteration count into the internal unsigned form.
pub fn validate_iterations(requested: i64) -> Result<u64> {
    match u64::try_from(requested) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(BenchError::InvalidIterationCount { requested }),
    }
}

/// Invokes `f` `warmup_iters` times untimed, then `iters` times with each call
/// timed on its own. Stops at the first error.
pub fn measure_fn<T, E>(
    iters: u64,
    warmup_iters: u64,
    mut f: impl FnMut() -> std::result::Result<T, E>,
) -> std::result::Result<Measured, Interrupted<E>> {
    for iteration in 0..warmup_iters {
        match f() {
            Ok(out) => {
                black_box(out);
            }
            Err(error) => {
                return Err(Interrupted {
                    phase: Phase::Warmup,
                    iteration,
                    error,
                })
            }
        }
    }

    let mut total_ns: u128 = 0;
    let mut min_ns = u128::MAX;
    let mut max_ns: u128 = 0;
    for iteration in 0..iters {
        let start = Instant::now();
        let out = f();
        let elapsed = start.elapsed().as_nanos();
        match out {
            Ok(out) => {
                black_box(out);
            }
            Err(error) => {
                return Err(Interrupted {
                    phase: Phase::Measure,
                    iteration,
                    error,
                })
            }
        }
        total_ns += elapsed;
        min_ns = min_ns.min(elapsed);
        max_ns = max_ns.max(elapsed);
    }

    if iters == 0 {
        min_ns = 0;
    }

    Ok(Measured {
        iters,
        warmup_iters,
        total_ns,
        min_ns,
        max_ns,
    })
}
