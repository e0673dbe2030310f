use crate::error::Result;
use crate::harness::BenchConfig;
use crate::runner::{BenchmarkRunner, CaseOutcome};


/// Registers every built-in suite on a runner configured from `cfg` and runs it.
pub fn run_suite(cfg: &BenchConfig) -> Result<Vec<CaseOutcome>> {
    let mut runner = BenchmarkRunner::from_config(cfg);
    strings::register(&mut runner, cfg)?;
    runner.run(cfg.iters())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    #[test]
    fn test_run_suite_quick_overrides() {
        let cfg = BenchConfig {
            warmup_iters: Some(1),
            iters: Some(3),
            ..Default::default()
        };

        let outcomes = run_suite(&cfg).unwrap();
        assert_eq!(outcomes.len(), 4);
        for outcome in outcomes {
            let result = outcome.unwrap();
            assert_eq!(result.iterations, 3);
            assert_eq!(result.warmup_iterations, 1);
        }
    }

    #[test]
    fn test_run_suite_rejects_bad_iters() {
        let cfg = BenchConfig {
            iters: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            run_suite(&cfg),
            Err(BenchError::InvalidIterationCount { requested: 0 })
        ));
    }
}
