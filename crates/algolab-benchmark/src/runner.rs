//! Experiment runner.
//!
//! Timing is strictly sequential: one thread, one subject, one tight loop
//! between two monotonic timestamps. Inputs are generated outside the timed
//! window, and subject outputs pass through [`std::hint::black_box`] so the
//! calls cannot be optimized away.

use std::hint::black_box;
use std::time::Instant;

use crate::config::{CachePolicy, ExperimentConfig};
use crate::error::BenchError;
use crate::result::{ExperimentReport, TrialResult};
use crate::subject::Subject;

/// Times `repetitions` invocations of `subject` against one input.
///
/// Under [`CachePolicy::Cold`] any memoized state is cleared immediately
/// before the timed window opens, so the trial reflects a cold-cache cost.
/// The input is only ever borrowed; the subject sees the same value on every
/// repetition.
///
/// # Errors
///
/// [`BenchError::InvalidRepetitions`] for `repetitions < 1`, rejected
/// before any timing. Errors raised by the subject abort the trial and
/// propagate unmodified; a failed trial is never retried.
pub fn run_trial<In, Out>(
    subject: &mut Subject<In, Out>,
    size: u64,
    input: &In,
    repetitions: u32,
    policy: CachePolicy,
) -> Result<TrialResult, BenchError> {
    if repetitions < 1 {
        return Err(BenchError::InvalidRepetitions(repetitions));
    }
    if policy == CachePolicy::Cold {
        subject.reset();
    }

    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(subject.invoke(input)?);
    }
    let elapsed = start.elapsed();

    Ok(TrialResult::new(size, repetitions, elapsed))
}

/// A configured experiment: one subject timed across a series of input
/// sizes.
///
/// The input generator is stored as a concrete type parameter, following
/// the zero-erasure convention used across the workspace.
///
/// # Example
///
/// ```
/// use algolab_benchmark::{generators, Experiment, ExperimentConfig, Subject};
/// use algolab_core::binary_search;
///
/// let config = ExperimentConfig::new("binary search")
///     .with_sizes([10, 100, 1000])
///     .with_repetitions(50);
///
/// let subject = Subject::plain(|arr: &Vec<i64>| {
///     Ok(binary_search(arr, &generators::worst_case_target(arr)))
/// });
///
/// let report = Experiment::new(config, subject, generators::sorted_array)
///     .run()
///     .unwrap();
/// assert_eq!(report.len(), 3);
/// ```
pub struct Experiment<In, Out, G>
where
    G: Fn(u64) -> In,
{
    config: ExperimentConfig,
    subject: Subject<In, Out>,
    subject_name: String,
    generator: G,
}

impl<In, Out, G> Experiment<In, Out, G>
where
    G: Fn(u64) -> In,
{
    /// Creates an experiment; the subject name defaults to the config name.
    pub fn new(config: ExperimentConfig, subject: Subject<In, Out>, generator: G) -> Self {
        let subject_name = config.name().to_string();
        Self {
            config,
            subject,
            subject_name,
            generator,
        }
    }

    /// Overrides the subject name shown in reports.
    pub fn with_subject_name(mut self, name: impl Into<String>) -> Self {
        self.subject_name = name.into();
        self
    }

    /// Runs every trial and returns the report.
    ///
    /// Consumes the experiment: a configuration is run exactly once. Sizes run in
    /// the order configured. Warmup invocations happen before the
    /// cache-policy step so a cold trial is genuinely cold even after
    /// warmup.
    ///
    /// # Errors
    ///
    /// Validation errors surface before any trial runs. If any single
    /// trial fails the whole experiment fails; no partial report is
    /// produced.
    pub fn run(mut self) -> Result<ExperimentReport, BenchError> {
        self.config.validate()?;

        let mut report = ExperimentReport::new(self.config.name(), &self.subject_name);
        if let Some(note) = self.config.complexity_note() {
            report = report.with_complexity_note(note);
        }

        for &size in self.config.sizes() {
            let input = (self.generator)(size);

            for _ in 0..self.config.warmup_count() {
                black_box(self.subject.invoke(&input)?);
            }

            let trial = run_trial(
                &mut self.subject,
                size,
                &input,
                self.config.repetitions(),
                self.config.cache_policy(),
            )?;
            tracing::debug!(
                experiment = %self.config.name(),
                size,
                repetitions = trial.repetitions,
                mean_ns = trial.mean_nanos(),
                "trial complete"
            );
            report.add_trial(trial);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::CachedAlgorithm;
    use algolab_core::{factorial, sum_array, AlgoError, Result as AlgoResult};
    use std::cell::Cell;
    use std::rc::Rc;

    fn sum_config(sizes: &[u64]) -> ExperimentConfig {
        ExperimentConfig::new("sum")
            .with_sizes(sizes.iter().copied())
            .with_repetitions(3)
            .with_warmup_count(1)
    }

    #[test]
    fn test_report_length_and_order() {
        let subject = Subject::plain(|arr: &Vec<i64>| Ok(sum_array(arr)));
        let report = Experiment::new(
            sum_config(&[10, 100, 1000]),
            subject,
            crate::generators::sorted_array,
        )
        .run()
        .unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report.sizes(), vec![10, 100, 1000]);
        for trial in &report.trials {
            assert_eq!(trial.repetitions, 3);
            assert!(trial.mean_nanos() >= 0.0);
        }
    }

    #[test]
    fn test_unsorted_sizes_not_reordered() {
        let subject = Subject::plain(|arr: &Vec<i64>| Ok(sum_array(arr)));
        let report = Experiment::new(
            sum_config(&[1000, 10, 100]),
            subject,
            crate::generators::sorted_array,
        )
        .run()
        .unwrap();
        assert_eq!(report.sizes(), vec![1000, 10, 100]);
    }

    #[test]
    fn test_zero_repetitions_rejected_before_timing() {
        let mut subject: Subject<u64, u64> = Subject::plain(|n| Ok(*n));
        let err = run_trial(&mut subject, 1, &1, 0, CachePolicy::Cold).unwrap_err();
        assert!(matches!(err, BenchError::InvalidRepetitions(0)));
    }

    #[test]
    fn test_empty_sizes_rejected() {
        let subject: Subject<u64, u64> = Subject::plain(|n| Ok(*n));
        let err = Experiment::new(ExperimentConfig::new("none"), subject, |n| n)
            .run()
            .unwrap_err();
        assert!(matches!(err, BenchError::EmptySizes));
    }

    #[test]
    fn test_subject_error_fails_whole_experiment() {
        let config = ExperimentConfig::new("factorial")
            .with_sizes([3, 5])
            .with_repetitions(2)
            .with_warmup_count(0);
        // The generator turns every size into a negative argument.
        let subject = Subject::plain(|n: &i64| factorial(*n));
        let err = Experiment::new(config, subject, |size| -(size as i64))
            .run()
            .unwrap_err();
        match err {
            BenchError::Algorithm(AlgoError::NegativeInput { name, value }) => {
                assert_eq!(name, "factorial");
                assert_eq!(value, -3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // Counts clear_cache calls so cache policy behavior is observable.
    struct ClearCounter {
        clears: Rc<Cell<u32>>,
    }

    impl CachedAlgorithm<u64, u64> for ClearCounter {
        fn call(&mut self, input: &u64) -> AlgoResult<u64> {
            Ok(*input)
        }

        fn clear_cache(&mut self) {
            self.clears.set(self.clears.get() + 1);
        }
    }

    #[test]
    fn test_cold_policy_clears_once_per_trial() {
        let clears = Rc::new(Cell::new(0));
        let subject = Subject::cached(ClearCounter {
            clears: Rc::clone(&clears),
        });
        let config = ExperimentConfig::new("cold")
            .with_sizes([1, 2, 3])
            .with_repetitions(5)
            .with_warmup_count(2);
        Experiment::new(config, subject, |n| n).run().unwrap();
        assert_eq!(clears.get(), 3);
    }

    #[test]
    fn test_warm_policy_never_clears() {
        let clears = Rc::new(Cell::new(0));
        let subject = Subject::cached(ClearCounter {
            clears: Rc::clone(&clears),
        });
        let config = ExperimentConfig::new("warm")
            .with_sizes([1, 2, 3])
            .with_repetitions(5)
            .with_cache_policy(CachePolicy::Warm);
        Experiment::new(config, subject, |n| n).run().unwrap();
        assert_eq!(clears.get(), 0);
    }

    #[test]
    fn test_input_not_mutated() {
        let config = ExperimentConfig::new("borrow")
            .with_sizes([4])
            .with_repetitions(10);
        let subject = Subject::plain(|arr: &Vec<i64>| Ok(sum_array(arr)));
        let report = Experiment::new(config, subject, crate::generators::sorted_array)
            .run()
            .unwrap();
        // Ten repetitions over the same borrowed input succeed uniformly.
        assert_eq!(report.trials[0].repetitions, 10);
    }
}
