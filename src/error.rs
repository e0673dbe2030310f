//! Error types for registering and running benchmark cases.

use std::fmt;

use thiserror::Error;

/// Boxed error returned by a benchmarked operation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Which loop an operation was in when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Untimed invocations ahead of measurement.
    Warmup,
    /// Timed invocations.
    Measure,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Warmup => "warmup",
            Phase::Measure => "measure",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum BenchError {
    /// A case with this name is already registered.
    #[error("benchmark case `{name}` is already registered")]
    DuplicateName { name: String },

    /// Iteration counts must be at least one.
    #[error("invalid iteration count {requested}: must be >= 1")]
    InvalidIterationCount { requested: i64 },

    #[error("no benchmark case named `{name}`")]
    UnknownCase { name: String },

    /// The benchmarked operation returned an error; the case was aborted.
    #[error("benchmark case `{name}` failed at {phase} iteration {iteration}: {source}")]
    OperationFailed {
        name: String,
        phase: Phase,
        iteration: u64,
        #[source]
        source: BoxError,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    /// Iteration index of an operation failure, if this is one.
    pub fn failed_iteration(&self) -> Option<u64> {
        match self {
            BenchError::OperationFailed { iteration, .. } => Some(*iteration),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn operation_failed_exposes_source() {
        let err = BenchError::OperationFailed {
            name: "boom".to_string(),
            phase: Phase::Measure,
            iteration: 3,
            source: "kaboom".into(),
        };

        assert_eq!(err.failed_iteration(), Some(3));
        assert_eq!(err.source().map(|s| s.to_string()), Some("kaboom".to_string()));
        assert_eq!(
            err.to_string(),
            "benchmark case `boom` failed at measure iteration 3: kaboom"
        );
    }

    #[test]
    fn other_variants_have_no_iteration() {
        let err = BenchError::UnknownCase {
            name: "missing".to_string(),
        };
        assert_eq!(err.failed_iteration(), None);
        assert_eq!(err.to_string(), "no benchmark case named `missing`");
    }
}
